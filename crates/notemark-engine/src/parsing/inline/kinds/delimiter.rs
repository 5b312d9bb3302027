/// Emphasis and strikethrough delimiter runs.
///
/// Whether a run can open or close is decided by the characters on either
/// side of it (the flanking rules). `_` is stricter than `*` so that
/// `snake_case_words` stay literal.
pub struct Delimiter;

impl Delimiter {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const TILDE: u8 = b'~';
    /// Strikethrough uses exactly two tildes on each side.
    pub const STRIKE_LEN: usize = 2;
    /// Longest emphasis a single run can open: strong inside emphasis.
    pub const MAX_EMPHASIS: usize = 3;

    fn is_punct(c: char) -> bool {
        c.is_ascii_punctuation() || (!c.is_ascii() && !c.is_alphanumeric() && !c.is_whitespace())
    }

    /// The chars just before `start` and just after `end`.
    pub fn neighbors(s: &str, start: usize, end: usize) -> (Option<char>, Option<char>) {
        (s[..start].chars().next_back(), s[end..].chars().next())
    }

    pub fn left_flanking(prev: Option<char>, next: Option<char>) -> bool {
        let Some(next) = next else {
            return false;
        };
        !next.is_whitespace()
            && (!Self::is_punct(next) || prev.is_none_or(|p| p.is_whitespace() || Self::is_punct(p)))
    }

    pub fn right_flanking(prev: Option<char>, next: Option<char>) -> bool {
        let Some(prev) = prev else {
            return false;
        };
        !prev.is_whitespace()
            && (!Self::is_punct(prev) || next.is_none_or(|n| n.is_whitespace() || Self::is_punct(n)))
    }

    pub fn can_open(ch: u8, prev: Option<char>, next: Option<char>) -> bool {
        let left = Self::left_flanking(prev, next);
        if ch == Self::UNDERSCORE {
            left && (!Self::right_flanking(prev, next) || prev.is_some_and(Self::is_punct))
        } else {
            left
        }
    }

    pub fn can_close(ch: u8, prev: Option<char>, next: Option<char>) -> bool {
        let right = Self::right_flanking(prev, next);
        if ch == Self::UNDERSCORE {
            right && (!Self::left_flanking(prev, next) || next.is_some_and(Self::is_punct))
        } else {
            right
        }
    }
}
