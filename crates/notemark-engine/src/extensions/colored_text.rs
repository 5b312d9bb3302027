//! `%color%text%%` inline span.

use super::{InlineExtension, InlineToken, after_first_char};
use crate::parsing::cursor::Cursor;

/// Colored text span with owned delimiters.
///
/// The color is a bare alphanumeric token (`red`, `teal`) or `#` followed by
/// hex digits (`#f00`, `#00ff00`). The text runs to the first `%%` that starts
/// after its first char and is kept verbatim.
pub struct ColoredText;

impl ColoredText {
    pub const MARK: u8 = b'%';
    pub const CLOSE: &'static str = "%%";

    fn is_color_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'#'
    }

    /// Whether `color` is a usable CSS color token.
    pub fn is_valid_color(color: &str) -> bool {
        match color.strip_prefix('#') {
            Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            None => !color.is_empty() && color.bytes().all(|b| b.is_ascii_alphanumeric()),
        }
    }

    /// Parses the `%color%` opener at offset 0, returning the color and the
    /// offset where the text begins.
    fn opener(src: &str) -> Option<(&str, usize)> {
        let mut cur = Cursor::new(src);
        if cur.bump()? != Self::MARK {
            return None;
        }
        let start = cur.i;
        if cur.eat_while(Self::is_color_byte) == 0 {
            return None;
        }
        let color = cur.since(start);
        if cur.bump()? != Self::MARK || !Self::is_valid_color(color) {
            return None;
        }
        Some((color, cur.i))
    }

    /// Offset of the closing `%%` for text starting at `text_start`.
    fn closer(src: &str, text_start: usize) -> Option<usize> {
        let first = after_first_char(&src[text_start..])?;
        let from = text_start + first;
        src[from..].find(Self::CLOSE).map(|idx| from + idx)
    }

    /// The inline style attribute value for `color`.
    pub fn css(color: &str) -> String {
        format!("color:{color};")
    }
}

impl InlineExtension for ColoredText {
    fn name(&self) -> &'static str {
        "colored_text"
    }

    fn probe(&self, src: &str) -> Option<usize> {
        let bytes = src.as_bytes();
        let mut from = 0;
        while let Some(idx) = bytes[from..].iter().position(|&b| b == Self::MARK) {
            let at = from + idx;
            if let Some((_, text_start)) = Self::opener(&src[at..]) {
                // A later opener can only close on a `%%` this one would also
                // reach, so one failed closer search ends the probe.
                return Self::closer(src, at + text_start).map(|_| at);
            }
            from = at + 1;
        }
        None
    }

    fn tokenize(&self, src: &str) -> Option<(InlineToken, usize)> {
        let (color, text_start) = Self::opener(src)?;
        let close = Self::closer(src, text_start)?;
        let token = InlineToken::ColoredText {
            color: color.to_string(),
            text: src[text_start..close].trim().to_string(),
        };
        Some((token, close + Self::CLOSE.len()))
    }
}
