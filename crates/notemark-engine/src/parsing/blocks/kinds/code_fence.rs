use crate::parsing::blocks::lines::{indent, is_blank, opener_body, strip_indent};
use crate::parsing::inline::kinds::Escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICK,
            FenceKind::Tildes => CodeFence::TILDE,
        }
    }
}

/// An open code fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence {
    pub kind: FenceKind,
    /// Length of the opening run; the closing run must be at least as long.
    pub len: usize,
    /// Indentation of the opener, removed from content lines.
    pub indent: usize,
    pub info: String,
}

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;

    /// Recognizes an opening fence line.
    pub fn open(line: &str) -> Option<Self> {
        let body = opener_body(line)?;
        let kind = match body.as_bytes().first().copied()? {
            Self::BACKTICK => FenceKind::Backticks,
            Self::TILDE => FenceKind::Tildes,
            _ => return None,
        };
        let len = body.bytes().take_while(|&b| b == kind.byte()).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = body[len..].trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(Self {
            kind,
            len,
            indent: indent(line),
            info: info.to_string(),
        })
    }

    pub fn closes(&self, line: &str) -> bool {
        let Some(body) = opener_body(line) else {
            return false;
        };
        let run = body.bytes().take_while(|&b| b == self.kind.byte()).count();
        run >= self.len && is_blank(&body[run..])
    }

    /// First word of the info string, used as the code language.
    pub fn lang(&self) -> Option<String> {
        self.info
            .split_whitespace()
            .next()
            .map(Escape::unescape)
    }

    /// A content line with the opener's indentation removed.
    pub fn content<'a>(&self, line: &'a str) -> &'a str {
        strip_indent(line, self.indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        let fence = CodeFence::open("```rust").unwrap();
        assert_eq!(fence.kind, FenceKind::Backticks);
        assert_eq!(fence.lang().as_deref(), Some("rust"));
    }

    #[test]
    fn detect_tilde_fence() {
        let fence = CodeFence::open("~~~~").unwrap();
        assert_eq!(fence.kind, FenceKind::Tildes);
        assert_eq!(fence.len, 4);
        assert_eq!(fence.lang(), None);
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::open("hello"), None);
        assert_eq!(CodeFence::open("``not"), None);
        assert_eq!(CodeFence::open("    ```"), None);
    }

    #[test]
    fn backtick_info_cannot_hold_backticks() {
        assert_eq!(CodeFence::open("``` a`b"), None);
        assert!(CodeFence::open("~~~ a`b").is_some());
    }

    #[test]
    fn closes_matching_fence() {
        let fence = CodeFence::open("````").unwrap();
        assert!(fence.closes("`````"));
        assert!(fence.closes("````  "));
        assert!(!fence.closes("```"));
        assert!(!fence.closes("~~~~"));
        assert!(!fence.closes("```` x"));
    }

    #[test]
    fn content_strips_opener_indent() {
        let fence = CodeFence::open("  ```").unwrap();
        assert_eq!(fence.content("    code"), "  code");
        assert_eq!(fence.content(" code"), "code");
    }
}
