//! Paragraph auto-formatting.
//!
//! Turns blank-line separated text into `<p>` paragraphs, optionally
//! converting the remaining single newlines into `<br/>`. Block-level tags are
//! never wrapped, and `<pre>` content is set aside before reflow and restored
//! afterwards.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const ALL_BLOCKS: &str = "(?:table|thead|tfoot|caption|col|colgroup|tbody|tr|td|th|div|dl|dd|dt|ul|ol|li|pre|form|map|area|blockquote|address|math|style|p|h[1-6]|hr|fieldset|legend|section|article|aside|hgroup|header|footer|nav|figure|figcaption|details|menu|summary)";

const BR: &str = "<br/>";
const NEWLINE_MARKER: &str = "<PreserveNewline />";

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid autop pattern")
}

fn blocks(pattern: &str) -> Regex {
    re(&pattern.replace("ALL", ALL_BLOCKS))
}

static DOUBLE_BR: Lazy<Regex> = Lazy::new(|| re(r"<br\s*/?>\s*<br\s*/?>"));
static BLOCK_OPEN: Lazy<Regex> = Lazy::new(|| blocks(r"(<ALL[^>]*>)"));
static BLOCK_CLOSE: Lazy<Regex> = Lazy::new(|| blocks(r"(</ALL>)"));

static OPTION_BEFORE: Lazy<Regex> = Lazy::new(|| re(r"\s*<option"));
static OPTION_AFTER: Lazy<Regex> = Lazy::new(|| re(r"</option>\s*"));

static OBJECT_OPEN: Lazy<Regex> = Lazy::new(|| re(r"(<object[^>]*>)\s*"));
static OBJECT_CLOSE: Lazy<Regex> = Lazy::new(|| re(r"\s*</object>"));
static PARAM_EMBED: Lazy<Regex> = Lazy::new(|| re(r"\s*(</?(?:param|embed)[^>]*>)\s*"));

static MEDIA_OPEN: Lazy<Regex> = Lazy::new(|| re(r"([<\[](?:audio|video)[^>\]]*[>\]])\s*"));
static MEDIA_CLOSE: Lazy<Regex> = Lazy::new(|| re(r"\s*([<\[]/(?:audio|video)[>\]])"));
static SOURCE_TRACK: Lazy<Regex> = Lazy::new(|| re(r"\s*(<(?:source|track)[^>]*>)\s*"));

static FIGCAPTION_OPEN: Lazy<Regex> = Lazy::new(|| re(r"\s*(<figcaption[^>]*>)"));
static FIGCAPTION_CLOSE: Lazy<Regex> = Lazy::new(|| re(r"</figcaption>\s*"));

static MULTI_NEWLINE: Lazy<Regex> = Lazy::new(|| re(r"\n\n+"));
static PARAGRAPH_SPLIT: Lazy<Regex> = Lazy::new(|| re(r"\n\s*\n"));

static EMPTY_P: Lazy<Regex> = Lazy::new(|| re(r"<p>\s*</p>"));
static P_INLINE_CLOSE: Lazy<Regex> = Lazy::new(|| re(r"<p>([^<]+)</(div|address|form)>"));
static P_AROUND_BLOCK: Lazy<Regex> = Lazy::new(|| blocks(r"<p>\s*(</?ALL[^>]*>)\s*</p>"));
static P_AROUND_LI: Lazy<Regex> = Lazy::new(|| re(r"<p>(<li.+?)</p>"));
static P_BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| re(r"(?i)<p><blockquote([^>]*)>"));
static P_BEFORE_BLOCK: Lazy<Regex> = Lazy::new(|| blocks(r"<p>\s*(</?ALL[^>]*>)"));
static P_AFTER_BLOCK: Lazy<Regex> = Lazy::new(|| blocks(r"(</?ALL[^>]*>)\s*</p>"));

static SCRIPT_BODY: Lazy<Regex> = Lazy::new(|| re(r"(?s)<script.*?</script>"));
static STYLE_BODY: Lazy<Regex> = Lazy::new(|| re(r"(?s)<style.*?</style>"));
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| re(r"\s*\n"));

static BR_AFTER_BLOCK: Lazy<Regex> = Lazy::new(|| blocks(r"(</?ALL[^>]*>)\s*<br/>"));
static BR_BEFORE_TAG: Lazy<Regex> =
    Lazy::new(|| re(r"<br/>(\s*</?(?:p|li|div|dl|dd|dt|th|pre|td|ul|ol)[^>]*>)"));
static TRAILING_NEWLINE_P: Lazy<Regex> = Lazy::new(|| re(r"\n</p>$"));

/// Swap every `<pre>...</pre>` block for a placeholder.
///
/// Returns the rewritten text and the (placeholder, original) pairs.
fn protect_pre(text: &str) -> (String, Vec<(String, String)>) {
    if !text.contains("<pre") {
        return (text.to_string(), Vec::new());
    }

    let mut parts: Vec<&str> = text.split("</pre>").collect();
    let last = parts.pop().unwrap_or("");
    let mut out = String::with_capacity(text.len());
    let mut saved = Vec::new();

    for part in parts {
        match part.find("<pre") {
            Some(start) => {
                let name = format!("<pre autop-pre-tag-{}></pre>", saved.len());
                saved.push((name.clone(), format!("{}</pre>", &part[start..])));
                out.push_str(&part[..start]);
                out.push_str(&name);
            }
            // Stray closing tag; keep the text as it was minus the tag
            None => out.push_str(part),
        }
    }
    out.push_str(last);
    (out, saved)
}

/// Replace newlines inside `<script>`/`<style>` with a marker
fn preserve_newlines(text: &str) -> String {
    let keep = |caps: &Captures<'_>| caps[0].replace('\n', NEWLINE_MARKER);
    let text = SCRIPT_BODY.replace_all(text, keep);
    STYLE_BODY.replace_all(&text, keep).into_owned()
}

/// Convert single newlines to `<br/>` unless one is already there
fn convert_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in LINE_BREAK.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if text[..m.start()].ends_with(BR) {
            out.push_str(m.as_str());
        } else {
            out.push_str(BR);
            out.push('\n');
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Wrap paragraphs in `<p>` and optionally convert line breaks.
///
/// Blank input yields an empty string.
pub fn autop(text: &str, br: bool) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let padded = format!("{}\n", text);
    let (mut pee, pre_tags) = protect_pre(&padded);

    pee = DOUBLE_BR.replace_all(&pee, "\n\n").into_owned();
    pee = BLOCK_OPEN.replace_all(&pee, "\n$1").into_owned();
    pee = BLOCK_CLOSE.replace_all(&pee, "$1\n\n").into_owned();
    pee = pee.replace("\r\n", "\n").replace('\r', "\n");

    if pee.contains("<option") {
        pee = OPTION_BEFORE.replace_all(&pee, "<option").into_owned();
        pee = OPTION_AFTER.replace_all(&pee, "</option>").into_owned();
    }

    if pee.contains("</object>") {
        pee = OBJECT_OPEN.replace_all(&pee, "$1").into_owned();
        pee = OBJECT_CLOSE.replace_all(&pee, "</object>").into_owned();
        pee = PARAM_EMBED.replace_all(&pee, "$1").into_owned();
    }

    if pee.contains("<source") || pee.contains("<track") {
        pee = MEDIA_OPEN.replace_all(&pee, "$1").into_owned();
        pee = MEDIA_CLOSE.replace_all(&pee, "$1").into_owned();
        pee = SOURCE_TRACK.replace_all(&pee, "$1").into_owned();
    }

    if pee.contains("<figcaption") {
        pee = FIGCAPTION_OPEN.replace_all(&pee, "$1").into_owned();
        pee = FIGCAPTION_CLOSE.replace_all(&pee, "</figcaption>").into_owned();
    }

    pee = MULTI_NEWLINE.replace_all(&pee, "\n\n").into_owned();

    pee = PARAGRAPH_SPLIT
        .split(&pee)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>\n", p.trim_matches('\n')))
        .collect();

    pee = EMPTY_P.replace_all(&pee, "").into_owned();
    pee = P_INLINE_CLOSE.replace_all(&pee, "<p>$1</p></$2>").into_owned();
    pee = P_AROUND_BLOCK.replace_all(&pee, "$1").into_owned();
    pee = P_AROUND_LI.replace_all(&pee, "$1").into_owned();
    pee = P_BLOCKQUOTE
        .replace_all(&pee, "<blockquote$1><p>")
        .into_owned();
    pee = pee.replace("</blockquote></p>", "</p></blockquote>");
    pee = P_BEFORE_BLOCK.replace_all(&pee, "$1").into_owned();
    pee = P_AFTER_BLOCK.replace_all(&pee, "$1").into_owned();

    if br {
        pee = preserve_newlines(&pee);
        pee = convert_line_breaks(&pee);
        pee = pee.replace(NEWLINE_MARKER, "\n");
    }

    pee = BR_AFTER_BLOCK.replace_all(&pee, "$1").into_owned();
    pee = BR_BEFORE_TAG.replace_all(&pee, "$1").into_owned();
    pee = TRAILING_NEWLINE_P.replace_all(&pee, "</p>").into_owned();

    for (name, original) in &pre_tags {
        pee = pee.replace(name, original);
    }

    pee
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_paragraphs() {
        assert_eq!(autop("a\n\nb", true), "<p>a</p>\n<p>b</p>\n");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(autop("", true), "");
        assert_eq!(autop(" \n\t\n", true), "");
    }

    #[test]
    fn test_single_newline_becomes_br() {
        assert_eq!(autop("one\ntwo", true), "<p>one<br/>\ntwo</p>\n");
        assert_eq!(autop("one\ntwo", false), "<p>one\ntwo</p>\n");
    }

    #[test]
    fn test_windows_newlines() {
        assert_eq!(autop("a\r\n\r\nb", true), "<p>a</p>\n<p>b</p>\n");
    }

    #[test]
    fn test_block_elements_not_wrapped() {
        let out = autop("<div>hello</div>\n\ntext", true);
        assert!(!out.contains("<p><div>"));
        assert!(out.contains("<div>hello</div>"));
        assert!(out.contains("<p>text</p>"));
    }

    #[test]
    fn test_heading_not_wrapped() {
        let out = autop("<h2>Title</h2>\nBody text", true);
        assert!(!out.contains("<p><h2>"));
        assert!(out.contains("<h2>Title</h2>"));
        assert!(out.contains("<p>Body text</p>"));
    }

    #[test]
    fn test_pre_content_untouched() {
        let input = "Intro\n\n<pre>line one\n\nline two</pre>\n\nOutro";
        let out = autop(input, true);
        assert!(out.contains("<pre>line one\n\nline two</pre>"));
        assert!(!out.contains("<p>line"));
        assert!(out.contains("<p>Intro</p>"));
        assert!(out.contains("<p>Outro</p>"));
    }

    #[test]
    fn test_option_whitespace_collapsed() {
        let out = autop("<select>\n<option>a</option>\n<option>b</option>\n</select>", true);
        assert!(out.contains("<option>a</option><option>b</option>"));
        assert!(!out.contains("<br/><option"));
    }

    #[test]
    fn test_media_children_collapsed() {
        let out = autop(
            "<video controls>\n<source src=\"a.mp4\">\n<track src=\"a.vtt\">\n</video>",
            true,
        );
        assert!(out.contains("<video controls><source src=\"a.mp4\"><track src=\"a.vtt\"></video>"));
    }

    #[test]
    fn test_figcaption_collapsed() {
        let out = autop("<figure><img src=\"x.png\">\n<figcaption>Cap</figcaption>\n</figure>", true);
        assert!(out.contains("<figcaption>Cap</figcaption>"));
        assert!(!out.contains("<p><figcaption>"));
    }

    #[test]
    fn test_script_newlines_preserved() {
        let out = autop("<script>\nvar a = 1;\nvar b = 2;\n</script>", true);
        assert!(out.contains("var a = 1;\nvar b = 2;"));
        assert!(!out.contains("var a = 1;<br/>"));
    }

    #[test]
    fn test_blockquote_paragraph_moves_inside() {
        let out = autop("<blockquote>quoted</blockquote>", true);
        assert!(!out.contains("<p><blockquote>"));
        assert!(out.contains("quoted"));
    }
}
