use crate::parsing::cursor::Cursor;

/// Raw inline HTML: open tags, closing tags and comments.
pub struct HtmlTag;

impl HtmlTag {
    pub const OPEN: u8 = b'<';
    pub const COMMENT_OPEN: &'static str = "<!--";
    pub const COMMENT_CLOSE: &'static str = "-->";

    fn is_ws(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\n')
    }

    fn eat_name(cur: &mut Cursor<'_>) -> bool {
        if !cur.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            return false;
        }
        cur.eat_while(|b| b.is_ascii_alphanumeric() || b == b'-');
        true
    }

    /// `<name attr="v" ...>` or `<name/>`.
    pub fn open_len(s: &str) -> Option<usize> {
        let mut cur = Cursor::new(s);
        if !cur.eat(b"<") || !Self::eat_name(&mut cur) {
            return None;
        }
        loop {
            let ws = cur.eat_while(Self::is_ws);
            if cur.eat(b"/>") || cur.eat(b">") {
                return Some(cur.i);
            }
            if ws == 0 {
                return None;
            }
            let first = cur.peek()?;
            if !(first.is_ascii_alphabetic() || first == b'_' || first == b':') {
                return None;
            }
            cur.eat_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'-'));

            let before_value = cur.i;
            cur.eat_while(Self::is_ws);
            if !cur.eat(b"=") {
                cur.i = before_value;
                continue;
            }
            cur.eat_while(Self::is_ws);
            match cur.peek()? {
                quote @ (b'"' | b'\'') => {
                    cur.bump();
                    let end = cur.rest().find(quote as char)?;
                    cur.bump_n(end + 1);
                }
                _ => {
                    let n = cur.eat_while(|b| {
                        !Self::is_ws(b) && !matches!(b, b'"' | b'\'' | b'=' | b'<' | b'>' | b'`')
                    });
                    if n == 0 {
                        return None;
                    }
                }
            }
        }
    }

    /// `</name>`.
    pub fn close_len(s: &str) -> Option<usize> {
        let mut cur = Cursor::new(s);
        if !cur.eat(b"</") || !Self::eat_name(&mut cur) {
            return None;
        }
        cur.eat_while(Self::is_ws);
        cur.eat(b">").then_some(cur.i)
    }

    /// `<!-- ... -->`.
    pub fn comment_len(s: &str) -> Option<usize> {
        let body = s.strip_prefix(Self::COMMENT_OPEN)?;
        body.find(Self::COMMENT_CLOSE)
            .map(|idx| Self::COMMENT_OPEN.len() + idx + Self::COMMENT_CLOSE.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<b>x", Some(3))]
    #[case("<br/>", Some(5))]
    #[case(r#"<a href="x y" data-n=1 hidden>"#, Some(30))]
    #[case("<a\nhref='x'>", Some(12))]
    #[case("<a href=>", None)]
    #[case("<1a>", None)]
    #[case("<a", None)]
    #[case("<ahref=\"x\"x>", None)]
    fn open_tags(#[case] s: &str, #[case] expected: Option<usize>) {
        assert_eq!(HtmlTag::open_len(s), expected);
    }

    #[test]
    fn close_tags() {
        assert_eq!(HtmlTag::close_len("</em >"), Some(6));
        assert_eq!(HtmlTag::close_len("</em x>"), None);
    }

    #[test]
    fn comments() {
        assert_eq!(HtmlTag::comment_len("<!-- hi -->rest"), Some(11));
        assert_eq!(HtmlTag::comment_len("<!-- open"), None);
    }
}
