//! Generic building blocks (buttons, text).

mod accessible_button;
mod emoji_text;

pub use accessible_button::{AccessibleButton, AccessibleButtonProps};
pub use emoji_text::{EmojiText, EmojiTextProps, TextElement};
