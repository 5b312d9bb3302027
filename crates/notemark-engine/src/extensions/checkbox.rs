//! `- [ ] text` / `- [x] text` checkbox line.

use super::{BlockExtension, BlockToken};

pub struct Checkbox;

impl Checkbox {
    pub const PREFIX: &'static str = "- [";
    pub const CHECKED: u8 = b'x';
    pub const UNCHECKED: u8 = b' ';
    pub const SUFFIX: &'static str = "] ";

    /// Parses a single line (without its newline).
    fn parse_line(line: &str) -> Option<(bool, &str)> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        let checked = match rest.as_bytes().first().copied()? {
            Self::CHECKED => true,
            Self::UNCHECKED => false,
            _ => return None,
        };
        let text = rest[1..].strip_prefix(Self::SUFFIX)?;
        (!text.is_empty()).then_some((checked, text))
    }

    fn first_line(src: &str) -> &str {
        src.split('\n').next().unwrap_or("")
    }

    pub fn input_tag(checked: bool) -> &'static str {
        if checked {
            r#"<input type="checkbox" disabled checked />"#
        } else {
            r#"<input type="checkbox" disabled />"#
        }
    }
}

impl BlockExtension for Checkbox {
    fn name(&self) -> &'static str {
        "checkbox"
    }

    fn probe(&self, src: &str) -> Option<usize> {
        if Self::parse_line(Self::first_line(src)).is_some() {
            return Some(0);
        }
        src.match_indices("\n- [")
            .map(|(idx, _)| idx + 1)
            .find(|&at| Self::parse_line(Self::first_line(&src[at..])).is_some())
    }

    fn tokenize(&self, src: &str) -> Option<(BlockToken, usize)> {
        let line = Self::first_line(src);
        let (checked, text) = Self::parse_line(line)?;
        let consumed = if line.len() < src.len() {
            line.len() + 1
        } else {
            line.len()
        };
        let token = BlockToken::Checkbox {
            checked,
            text: text.to_string(),
        };
        Some((token, consumed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn checkbox(checked: bool, text: &str) -> BlockToken {
        BlockToken::Checkbox {
            checked,
            text: text.into(),
        }
    }

    #[test]
    fn unchecked_line_consumes_newline() {
        assert_eq!(
            Checkbox.tokenize("- [ ] todo\nnext"),
            Some((checkbox(false, "todo"), 11))
        );
    }

    #[test]
    fn checked_line_at_end_of_input() {
        assert_eq!(
            Checkbox.tokenize("- [x] done"),
            Some((checkbox(true, "done"), 10))
        );
    }

    #[rstest]
    #[case::uppercase_x("- [X] done")]
    #[case::empty_text("- [ ] ")]
    #[case::no_space("- [ ]done")]
    #[case::plain_item("- item")]
    #[case::star_bullet("* [ ] todo")]
    fn rejects(#[case] src: &str) {
        assert_eq!(Checkbox.tokenize(src), None);
    }

    #[test]
    fn probe_skips_plain_list_items() {
        let src = "- [link](x)\n- [x] real";
        assert_eq!(Checkbox.probe(src), Some(12));
    }

    #[test]
    fn input_tag_marks_checked_state() {
        assert!(Checkbox::input_tag(true).contains("checked"));
        assert!(!Checkbox::input_tag(false).contains("checked"));
    }
}
