use crate::parsing::blocks::lines::{is_blank, opener_body};
use crate::parsing::inline::kinds::Link;
use crate::parsing::refs::LinkRef;

/// A `[label]: destination "title"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRefDef {
    pub label: String,
    pub target: LinkRef,
}

impl LinkRefDef {
    pub const COLON: char = ':';

    pub fn parse(line: &str) -> Option<Self> {
        let body = opener_body(line)?;
        let (label, label_len) = Link::label(body)?;
        if is_blank(label) {
            return None;
        }
        let rest = body[label_len..].strip_prefix(Self::COLON)?.trim_start();
        let (href, dest_len) = Link::destination(rest)?;
        if dest_len == 0 {
            return None;
        }

        let after = &rest[dest_len..];
        let title_src = after.trim_start();
        if title_src.is_empty() {
            return Some(Self::new(label, href, None));
        }
        if title_src.len() == after.len() {
            return None;
        }
        let (title, title_len) = Link::title(title_src)?;
        is_blank(&title_src[title_len..]).then(|| Self::new(label, href, Some(title)))
    }

    fn new(label: &str, href: String, title: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            target: LinkRef { href, title },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_destination() {
        let def = LinkRefDef::parse("[Docs]: https://example.com/docs").unwrap();
        assert_eq!(def.label, "Docs");
        assert_eq!(def.target.href, "https://example.com/docs");
        assert_eq!(def.target.title, None);
    }

    #[test]
    fn angle_destination_with_title() {
        let def = LinkRefDef::parse("[a b]: <my page.html> 'The Title'").unwrap();
        assert_eq!(def.target.href, "my page.html");
        assert_eq!(def.target.title.as_deref(), Some("The Title"));
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(LinkRefDef::parse("[a]: "), None);
        assert_eq!(LinkRefDef::parse("[a] /url"), None);
        assert_eq!(LinkRefDef::parse("[]: /url"), None);
        assert_eq!(LinkRefDef::parse("[a]: /url \"t\" trailing"), None);
    }
}
