//! Integers written out as English words.

const ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Group names from the largest down
const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

fn below_thousand(n: u64) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                units => format!("{}-{}", tens, ONES[units as usize]),
            }
        }
        _ => {
            let hundreds = format!("{} hundred", ONES[(n / 100) as usize]);
            match n % 100 {
                0 => hundreds,
                rest => format!("{} {}", hundreds, below_thousand(rest)),
            }
        }
    }
}

fn unsigned_to_words(n: u64) -> String {
    for (scale, name) in SCALES {
        if n >= scale {
            let head = format!("{} {}", unsigned_to_words(n / scale), name);
            return match n % scale {
                0 => head,
                rest => format!("{} {}", head, unsigned_to_words(rest)),
            };
        }
    }
    below_thousand(n)
}

/// Write `n` out in English words.
///
/// Compound tens are hyphenated (`twenty-one`) and groups are joined with
/// spaces (`one thousand one`). Zero has no words and yields an empty
/// string; negatives are prefixed with `negative`.
pub fn number_to_words(n: i64) -> String {
    if n == 0 {
        return String::new();
    }
    let words = unsigned_to_words(n.unsigned_abs());
    if n < 0 {
        format!("negative {}", words)
    } else {
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(number_to_words(0), "");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(number_to_words(7), "seven");
        assert_eq!(number_to_words(13), "thirteen");
        assert_eq!(number_to_words(20), "twenty");
        assert_eq!(number_to_words(21), "twenty-one");
        assert_eq!(number_to_words(99), "ninety-nine");
    }

    #[test]
    fn test_hundreds_and_groups() {
        assert_eq!(number_to_words(100), "one hundred");
        assert_eq!(number_to_words(115), "one hundred fifteen");
        assert_eq!(number_to_words(1001), "one thousand one");
        assert_eq!(number_to_words(20_000), "twenty thousand");
        assert_eq!(
            number_to_words(1_234_567),
            "one million two hundred thirty-four thousand five hundred sixty-seven"
        );
        assert_eq!(number_to_words(3_000_000_042), "three billion forty-two");
    }

    #[test]
    fn test_negative_is_concatenated() {
        // The prefix is joined as text, never added numerically
        assert_eq!(number_to_words(-21), "negative twenty-one");
        assert_eq!(number_to_words(-1), "negative one");
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert!(number_to_words(i64::MIN).starts_with("negative nine quintillion"));
        assert!(number_to_words(i64::MAX).starts_with("nine quintillion"));
    }
}
