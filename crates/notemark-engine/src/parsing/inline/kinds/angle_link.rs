use crate::parsing::cursor::Cursor;

/// Angle-bracket autolinks: `<https://example.com>` and `<me@example.com>`.
pub struct AngleLink;

impl AngleLink {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const MAILTO: &'static str = "mailto:";
    const MIN_SCHEME: usize = 2;
    const MAX_SCHEME: usize = 32;

    fn is_email_local(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b"._!#$%&'*+/=?^`{|}~-".contains(&b)
    }

    /// Returns the href, the displayed text and the consumed length.
    pub fn parse(s: &str) -> Option<(String, String, usize)> {
        Self::uri(s).or_else(|| Self::email(s))
    }

    fn uri(s: &str) -> Option<(String, String, usize)> {
        let mut cur = Cursor::new(s);
        if cur.bump()? != Self::OPEN || !cur.peek()?.is_ascii_alphabetic() {
            return None;
        }
        let scheme = cur.eat_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-'));
        if !(Self::MIN_SCHEME..=Self::MAX_SCHEME).contains(&scheme) || !cur.eat(b":") {
            return None;
        }
        cur.eat_while(|b| b > b' ' && b != b'<' && b != Self::CLOSE && b != 0x7f);
        if cur.peek()? != Self::CLOSE {
            return None;
        }
        let text = s[1..cur.i].to_string();
        Some((text.clone(), text, cur.i + 1))
    }

    fn email(s: &str) -> Option<(String, String, usize)> {
        let mut cur = Cursor::new(s);
        if cur.bump()? != Self::OPEN || cur.eat_while(Self::is_email_local) == 0 || !cur.eat(b"@") {
            return None;
        }
        let domain_start = cur.i;
        cur.eat_while(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.');
        let domain = cur.since(domain_start);
        let valid = !domain.is_empty()
            && domain
                .split('.')
                .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'));
        if !valid || cur.peek()? != Self::CLOSE {
            return None;
        }
        let text = s[1..cur.i].to_string();
        Some((format!("{}{text}", Self::MAILTO), text, cur.i + 1))
    }
}
