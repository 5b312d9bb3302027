/// A byte cursor over a string slice, used by every hand-written scanner.
///
/// Delimiters in this dialect are all ASCII, so scanners compare bytes and
/// only ever stop on ASCII positions, which are always char boundaries. Use
/// [`Cursor::bump_char`] when advancing past arbitrary text.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The byte under the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.bytes_left().get(n).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.bytes_left().starts_with(pat)
    }

    fn bytes_left(&self) -> &'a [u8] {
        self.s.as_bytes().get(self.i..).unwrap_or_default()
    }

    pub fn bump(&mut self) -> Option<u8> {
        self.peek().inspect(|_| self.i += 1)
    }

    /// Skips `n` bytes, possibly past the end.
    pub fn bump_n(&mut self, n: usize) {
        self.i = self.i.saturating_add(n);
    }

    /// Advances past one full char.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes `pat` if the remaining input starts with it.
    pub fn eat(&mut self, pat: &[u8]) -> bool {
        if self.starts_with(pat) {
            self.i += pat.len();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds, returning how many were consumed.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        self.i - start
    }

    /// Length of the run of `b` starting at the current position.
    pub fn run_len(&self, b: u8) -> usize {
        self.bytes_left()
            .iter()
            .take_while(|&&x| x == b)
            .count()
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Text between `from` and the current position.
    pub fn since(&self, from: usize) -> &'a str {
        self.s.get(from..self.i).unwrap_or("")
    }
}
