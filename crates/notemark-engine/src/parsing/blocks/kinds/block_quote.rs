use crate::parsing::blocks::lines::opener_body;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one level of blockquote prefix from a line.
    ///
    /// Up to three spaces may precede the `>`; one space after it is part of
    /// the prefix. Nested levels are left for the recursive scan.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let body = opener_body(line)?.strip_prefix(Self::PREFIX)?;
        Some(body.strip_prefix(' ').unwrap_or(body))
    }

    pub fn starts(line: &str) -> bool {
        Self::strip_prefix(line).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_keeps_nested_levels() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
        assert_eq!(BlockQuote::strip_prefix(">>hello"), Some(">hello"));
    }

    #[test]
    fn strip_indented_quote() {
        assert_eq!(BlockQuote::strip_prefix("   >x"), Some("x"));
        assert_eq!(BlockQuote::strip_prefix("    > x"), None);
    }

    #[test]
    fn empty_quote_line() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }
}
