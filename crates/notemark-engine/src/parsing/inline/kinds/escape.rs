use crate::parsing::cursor::Cursor;

/// Backslash escapes.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    pub fn is_escapable(b: u8) -> bool {
        b.is_ascii_punctuation()
    }

    /// Resolves backslash escapes in link destinations, titles and code
    /// languages.
    pub fn unescape(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(&next) = chars.peek() {
                    if next.is_ascii_punctuation() {
                        out.push(next);
                        chars.next();
                        continue;
                    }
                }
            }
            out.push(c);
        }
        out
    }
}

/// Character references: `&name;`, `&#123;`, `&#x1F;`.
pub struct Entity;

impl Entity {
    pub const AMP: u8 = b'&';
    const MAX_NAME: usize = 32;

    /// Length of a well-formed reference at the start of `s`.
    pub fn len(s: &str) -> Option<usize> {
        let mut cur = Cursor::new(s);
        if cur.bump()? != Self::AMP {
            return None;
        }
        let body = if cur.eat(b"#x") || cur.eat(b"#X") {
            cur.eat_while(|b| b.is_ascii_hexdigit())
        } else if cur.eat(b"#") {
            let n = cur.eat_while(|b| b.is_ascii_digit());
            if n > 7 {
                return None;
            }
            n
        } else {
            if !cur.peek()?.is_ascii_alphabetic() {
                return None;
            }
            cur.eat_while(|b| b.is_ascii_alphanumeric())
        };
        if body == 0 || body > Self::MAX_NAME {
            return None;
        }
        cur.eat(b";").then_some(cur.i)
    }
}
