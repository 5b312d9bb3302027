use crate::parsing::cursor::Cursor;

use super::Escape;

/// Links and images: bracketed labels, destinations and titles.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const IMAGE: u8 = b'!';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    pub const MAX_LABEL: usize = 999;
    const MAX_PAREN_DEPTH: usize = 32;

    fn is_ws(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\n')
    }

    /// A `[label]` at the start of `s` with no unescaped brackets inside.
    /// Returns the raw label and the bracketed length.
    pub fn label(s: &str) -> Option<(&str, usize)> {
        let mut cur = Cursor::new(s);
        if cur.bump()? != Self::OPEN {
            return None;
        }
        loop {
            match cur.peek()? {
                Escape::BACKSLASH => {
                    cur.bump();
                    cur.bump_char();
                }
                Self::OPEN => return None,
                Self::CLOSE => break,
                _ => {
                    cur.bump_char();
                }
            }
            if cur.i > Self::MAX_LABEL + 1 {
                return None;
            }
        }
        Some((&s[1..cur.i], cur.i + 1))
    }

    /// A link destination at the start of `s`: `<...>` or a run without
    /// spaces and with balanced parentheses. The returned length may be zero.
    pub fn destination(s: &str) -> Option<(String, usize)> {
        let bytes = s.as_bytes();
        if bytes.first() == Some(&b'<') {
            let mut i = 1;
            while i < bytes.len() {
                match bytes[i] {
                    Escape::BACKSLASH => i += 2,
                    b'\n' | b'<' => return None,
                    b'>' => return Some((Escape::unescape(&s[1..i]), i + 1)),
                    _ => i += 1,
                }
            }
            return None;
        }

        let mut depth = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                Escape::BACKSLASH if bytes.get(i + 1).is_some_and(|b| Escape::is_escapable(*b)) => {
                    i += 2
                }
                b if b <= b' ' || b == 0x7f => break,
                Self::DEST_OPEN => {
                    depth += 1;
                    if depth > Self::MAX_PAREN_DEPTH {
                        return None;
                    }
                    i += 1;
                }
                Self::DEST_CLOSE if depth == 0 => break,
                Self::DEST_CLOSE => {
                    depth -= 1;
                    i += 1;
                }
                _ => i += 1,
            }
        }
        (depth == 0).then(|| (Escape::unescape(&s[..i]), i))
    }

    /// A `"title"`, `'title'` or `(title)` at the start of `s`.
    pub fn title(s: &str) -> Option<(String, usize)> {
        let bytes = s.as_bytes();
        let close = match bytes.first()? {
            b'"' => b'"',
            b'\'' => b'\'',
            b'(' => b')',
            _ => return None,
        };
        let mut i = 1;
        while i < bytes.len() {
            match bytes[i] {
                Escape::BACKSLASH => i += 2,
                b if b == close => return Some((Escape::unescape(&s[1..i]), i + 1)),
                b'(' if close == b')' => return None,
                _ => i += 1,
            }
        }
        None
    }

    /// An inline target `(dest "title")` at the start of `s`.
    pub fn inline_target(s: &str) -> Option<(String, Option<String>, usize)> {
        let mut cur = Cursor::new(s);
        if cur.bump()? != Self::DEST_OPEN {
            return None;
        }
        cur.eat_while(Self::is_ws);
        if cur.eat(&[Self::DEST_CLOSE]) {
            return Some((String::new(), None, cur.i));
        }

        let (href, len) = Self::destination(cur.rest())?;
        cur.bump_n(len);
        let gap = cur.eat_while(Self::is_ws);
        let mut title = None;
        if gap > 0 || len == 0 {
            if let Some((t, len)) = Self::title(cur.rest()) {
                title = Some(t);
                cur.bump_n(len);
                cur.eat_while(Self::is_ws);
            }
        }
        cur.eat(&[Self::DEST_CLOSE]).then_some((href, title, cur.i))
    }
}
