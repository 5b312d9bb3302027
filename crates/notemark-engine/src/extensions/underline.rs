//! `!~options; text ~!` decorated underline span.

use super::{InlineExtension, InlineToken, after_first_char};
use crate::parsing::cursor::Cursor;

/// Presentation options of an underline span. `None` means "use the
/// browser default" and the declaration is left out of the style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnderlineOptions {
    pub color: Option<String>,
    pub style: Option<String>,
    pub line: Option<String>,
    pub thickness_px: Option<u8>,
}

impl UnderlineOptions {
    pub const MAX_THICKNESS: u8 = 10;

    /// Builds options from the raw `;`-terminated fields, in the order
    /// color, style, decoration type, thickness.
    fn from_fields(fields: &[&str]) -> Self {
        let field = |idx: usize| -> Option<String> {
            let value = fields.get(idx)?.trim();
            (!value.is_empty() && value != "default").then(|| value.to_string())
        };
        Self {
            color: field(0),
            style: field(1),
            line: field(2).map(|line| {
                if line == "both" {
                    "underline overline".to_string()
                } else {
                    line
                }
            }),
            thickness_px: field(3)
                .and_then(|t| t.parse::<u8>().ok())
                .filter(|t| (1..=Self::MAX_THICKNESS).contains(t)),
        }
    }

    /// Inline style attribute value; the decoration line is always present.
    pub fn css(&self) -> String {
        let mut css = format!(
            "text-decoration-line:{};",
            self.line.as_deref().unwrap_or("underline")
        );
        if let Some(color) = &self.color {
            css.push_str(&format!("text-decoration-color:{color};"));
        }
        if let Some(style) = &self.style {
            css.push_str(&format!("text-decoration-style:{style};"));
        }
        if let Some(px) = self.thickness_px {
            css.push_str(&format!("text-decoration-thickness:{px}px;"));
        }
        css
    }
}

/// Underline span: `!~` then up to four `;`-terminated option fields, one
/// space, the text, and ` ~!`.
///
/// With no fields the form is `!~ text ~!`.
pub struct Underline;

impl Underline {
    pub const OPEN: &'static str = "!~";
    pub const CLOSE: &'static str = " ~!";
    pub const FIELD_END: u8 = b';';
    pub const MAX_FIELDS: usize = 4;

    fn is_field_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || matches!(b, b'#' | b'.' | b'-' | b' ')
    }

    /// Parses the opener and option fields at offset 0, returning the
    /// options and the offset where the text begins.
    ///
    /// Field text may contain spaces, so the longest run of fields that is
    /// followed by the separating space wins.
    fn opener(src: &str) -> Option<(UnderlineOptions, usize)> {
        let mut cur = Cursor::new(src);
        if !cur.eat(Self::OPEN.as_bytes()) {
            return None;
        }
        let mut ends = vec![cur.i];
        while ends.len() <= Self::MAX_FIELDS {
            cur.eat_while(Self::is_field_byte);
            if cur.peek() != Some(Self::FIELD_END) {
                break;
            }
            cur.bump();
            ends.push(cur.i);
        }

        let count = (0..ends.len())
            .rev()
            .find(|&n| src.as_bytes().get(ends[n]) == Some(&b' '))?;
        let mut fields = Vec::with_capacity(count);
        for pair in ends[..=count].windows(2) {
            fields.push(&src[pair[0]..pair[1] - 1]);
        }
        Some((UnderlineOptions::from_fields(&fields), ends[count] + 1))
    }

    fn closer(src: &str, text_start: usize) -> Option<usize> {
        let first = after_first_char(&src[text_start..])?;
        let from = text_start + first;
        src[from..].find(Self::CLOSE).map(|idx| from + idx)
    }
}

impl InlineExtension for Underline {
    fn name(&self) -> &'static str {
        "underline"
    }

    fn probe(&self, src: &str) -> Option<usize> {
        let mut from = 0;
        while let Some(idx) = src[from..].find(Self::OPEN) {
            let at = from + idx;
            if let Some((_, text_start)) = Self::opener(&src[at..]) {
                return Self::closer(src, at + text_start).map(|_| at);
            }
            from = at + 1;
        }
        None
    }

    fn tokenize(&self, src: &str) -> Option<(InlineToken, usize)> {
        let (options, text_start) = Self::opener(src)?;
        let close = Self::closer(src, text_start)?;
        let text = src[text_start..close].trim();
        if text.is_empty() {
            return None;
        }
        let token = InlineToken::Underline {
            options,
            text: text.to_string(),
        };
        Some((token, close + Self::CLOSE.len()))
    }
}
