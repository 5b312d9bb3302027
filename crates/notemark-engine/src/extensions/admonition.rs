//! `!!! kind` admonition block.

use super::{BlockExtension, BlockToken, open_ended_body_len};

/// Callout flavor of an admonition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdmonitionKind {
    Info,
    Note,
    #[default]
    Warning,
    Danger,
    Greentext,
}

impl AdmonitionKind {
    pub const ALL: [AdmonitionKind; 5] = [
        AdmonitionKind::Info,
        AdmonitionKind::Note,
        AdmonitionKind::Warning,
        AdmonitionKind::Danger,
        AdmonitionKind::Greentext,
    ];

    /// Resolves a header word. Matching is exact and lowercase; anything
    /// unrecognized, including an empty header, is a warning.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdmonitionKind::Info => "info",
            AdmonitionKind::Note => "note",
            AdmonitionKind::Warning => "warning",
            AdmonitionKind::Danger => "danger",
            AdmonitionKind::Greentext => "greentext",
        }
    }

    /// Title shown above the body.
    pub fn label(self) -> &'static str {
        match self {
            AdmonitionKind::Info => "INFO",
            AdmonitionKind::Note => "NOTE",
            AdmonitionKind::Warning => "WARNING",
            AdmonitionKind::Danger => "DANGER",
            AdmonitionKind::Greentext => "GREENTEXT",
        }
    }
}

impl std::fmt::Display for AdmonitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admonition block: a `!!!` header line naming the kind, followed by a
/// markdown body running to the next blank line.
pub struct Admonition;

impl Admonition {
    pub const MARK: &'static str = "!!!";

    pub fn open_tag(kind: AdmonitionKind) -> String {
        format!(
            r#"<div class="admonition {}"><strong>{}</strong><div>"#,
            kind.as_str(),
            kind.label()
        )
    }

    pub const CLOSE_TAG: &'static str = "</div></div>";
}

impl BlockExtension for Admonition {
    fn name(&self) -> &'static str {
        "admonition"
    }

    fn probe(&self, src: &str) -> Option<usize> {
        if src.starts_with(Self::MARK) {
            return Some(0);
        }
        src.find("\n!!!").map(|idx| idx + 1)
    }

    fn tokenize(&self, src: &str) -> Option<(BlockToken, usize)> {
        let rest = src.strip_prefix(Self::MARK)?;
        let header_end = rest.find('\n')?;
        let header = &rest[..header_end];
        if !header.is_empty() && !header.starts_with([' ', '\t']) {
            return None;
        }
        let kind = AdmonitionKind::from_name(header.trim());

        let body = &rest[header_end + 1..];
        let len = open_ended_body_len(body);
        if len == 0 {
            return None;
        }
        let token = BlockToken::Admonition {
            kind,
            body: body[..len].trim_matches('\n').to_string(),
        };
        Some((token, Self::MARK.len() + header_end + 1 + len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("info", AdmonitionKind::Info)]
    #[case("note", AdmonitionKind::Note)]
    #[case("warning", AdmonitionKind::Warning)]
    #[case("danger", AdmonitionKind::Danger)]
    #[case("greentext", AdmonitionKind::Greentext)]
    #[case("Info", AdmonitionKind::Warning)]
    #[case("tip", AdmonitionKind::Warning)]
    #[case("", AdmonitionKind::Warning)]
    fn kind_from_name(#[case] name: &str, #[case] expected: AdmonitionKind) {
        assert_eq!(AdmonitionKind::from_name(name), expected);
    }

    #[test]
    fn tokenizes_header_and_body() {
        let (token, len) = Admonition
            .tokenize("!!! info\nBody text\n\nafter")
            .unwrap();
        assert_eq!(
            token,
            BlockToken::Admonition {
                kind: AdmonitionKind::Info,
                body: "Body text".into()
            }
        );
        assert_eq!(len, 18);
    }

    #[test]
    fn bare_marker_defaults_to_warning() {
        let (token, _) = Admonition.tokenize("!!!\nCareful").unwrap();
        assert_eq!(
            token,
            BlockToken::Admonition {
                kind: AdmonitionKind::Warning,
                body: "Careful".into()
            }
        );
    }

    #[test]
    fn header_word_must_be_separated() {
        assert_eq!(Admonition.tokenize("!!!info\nbody"), None);
    }

    #[test]
    fn header_without_body_is_not_an_admonition() {
        assert_eq!(Admonition.tokenize("!!! info"), None);
        assert_eq!(Admonition.tokenize("!!! info\n"), None);
    }

    #[test]
    fn open_tag_names_kind() {
        assert_eq!(
            Admonition::open_tag(AdmonitionKind::Danger),
            r#"<div class="admonition danger"><strong>DANGER</strong><div>"#
        );
    }
}
