/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them. The
/// closing run must have exactly as many backticks as the opening run.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Start of the first backtick run of exactly `len` after `from`.
    pub fn find_close(s: &str, from: usize, len: usize) -> Option<usize> {
        let bytes = s.as_bytes();
        let mut i = from;
        while i < bytes.len() {
            if bytes[i] != Self::TICK {
                i += 1;
                continue;
            }
            let start = i;
            while i < bytes.len() && bytes[i] == Self::TICK {
                i += 1;
            }
            if i - start == len {
                return Some(start);
            }
        }
        None
    }

    /// Code span content: newlines become spaces and one space is stripped
    /// from each side when both are present.
    pub fn content(raw: &str) -> String {
        let s = raw.replace('\n', " ");
        let padded = s.len() >= 2 && s.starts_with(' ') && s.ends_with(' ');
        if padded && !s.bytes().all(|b| b == b' ') {
            s[1..s.len() - 1].to_string()
        } else {
            s
        }
    }
}
