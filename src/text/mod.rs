//! Standalone text helpers shared by plugins and themes.

pub mod autop;
pub mod bytes;
pub mod color;
pub mod words;

pub use autop::autop;
pub use bytes::{format_bytes, format_bytes_str};
pub use color::hex_to_rgb;
pub use words::number_to_words;
