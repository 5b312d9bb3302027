use crate::parsing::blocks::lines::opener_body;

pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MIN_MARKS: usize = 3;

    /// Three or more of the same mark, optionally separated by spaces.
    pub fn matches(line: &str) -> bool {
        let Some(body) = opener_body(line) else {
            return false;
        };
        let Some(&mark) = body.as_bytes().first() else {
            return false;
        };
        if !Self::MARKS.contains(&mark) {
            return false;
        }
        let mut count = 0;
        for b in body.bytes() {
            match b {
                b' ' | b'\t' => {}
                b if b == mark => count += 1,
                _ => return false,
            }
        }
        count >= Self::MIN_MARKS
    }
}
