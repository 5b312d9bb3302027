use crate::parsing::blocks::lines::opener_body;

/// Paragraph block type.
///
/// Paragraphs have no opening delimiter: they are the default leaf block when
/// no other rule matches. The only syntax they own is the setext underline
/// that turns a paragraph into a heading.
pub struct Paragraph;

impl Paragraph {
    pub const SETEXT_H1: u8 = b'=';
    pub const SETEXT_H2: u8 = b'-';

    /// Heading level for a setext underline line.
    pub fn setext_level(line: &str) -> Option<u8> {
        let body = opener_body(line)?.trim_end();
        let &mark = body.as_bytes().first()?;
        if !body.bytes().all(|b| b == mark) {
            return None;
        }
        match mark {
            Self::SETEXT_H1 => Some(1),
            Self::SETEXT_H2 => Some(2),
            _ => None,
        }
    }
}
