//! `!>` spoiler block.

use super::{BlockExtension, BlockToken, open_ended_body_len};

/// Spoiler block: `!>` at the start of a line hides everything up to the
/// next blank line (or end of input). The body is markdown.
pub struct Spoiler;

impl Spoiler {
    pub const MARK: &'static str = "!>";
    pub const OPEN_TAG: &'static str = r#"<div class="spoiler">"#;
    pub const CLOSE_TAG: &'static str = "</div>";
}

impl BlockExtension for Spoiler {
    fn name(&self) -> &'static str {
        "spoiler"
    }

    fn probe(&self, src: &str) -> Option<usize> {
        if src.starts_with(Self::MARK) {
            return Some(0);
        }
        src.find("\n!>").map(|idx| idx + 1)
    }

    fn tokenize(&self, src: &str) -> Option<(BlockToken, usize)> {
        let body = src.strip_prefix(Self::MARK)?;
        let len = open_ended_body_len(body);
        if len == 0 {
            return None;
        }
        let token = BlockToken::Spoiler {
            body: body[..len].trim().to_string(),
        };
        Some((token, Self::MARK.len() + len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spoiler(body: &str) -> BlockToken {
        BlockToken::Spoiler { body: body.into() }
    }

    #[test]
    fn body_runs_to_blank_line() {
        assert_eq!(
            Spoiler.tokenize("!> hidden\nmore\n\nvisible"),
            Some((spoiler("hidden\nmore"), 14))
        );
    }

    #[test]
    fn body_runs_to_end_of_input() {
        assert_eq!(Spoiler.tokenize("!>secret"), Some((spoiler("secret"), 8)));
    }

    #[test]
    fn bare_marker_is_not_a_spoiler() {
        assert_eq!(Spoiler.tokenize("!>"), None);
    }

    #[test]
    fn marker_must_be_at_offset_zero() {
        assert_eq!(Spoiler.tokenize(" !> x"), None);
    }

    #[test]
    fn probe_finds_line_starts_only() {
        assert_eq!(Spoiler.probe("text !> not here\n!> here"), Some(17));
        assert_eq!(Spoiler.probe("!> first"), Some(0));
        assert_eq!(Spoiler.probe("no spoilers"), None);
    }
}
