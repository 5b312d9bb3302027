use crate::parsing::blocks::lines::opener_body;

/// `#` through `######` headings.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARK: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and the raw content of a heading line.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let body = opener_body(line)?;
        let level = body.bytes().take_while(|&b| b == Self::MARK).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &body[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((level as u8, Self::strip_closing(rest.trim())))
    }

    /// Removes an optional closing `#` run preceded by whitespace.
    fn strip_closing(content: &str) -> &str {
        let without = content.trim_end_matches(Self::MARK as char);
        if without.is_empty() {
            return without;
        }
        if without.len() < content.len() && without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("###### six", Some((6, "six")))]
    #[case("####### seven", None)]
    #[case("#nospace", None)]
    #[case("#", Some((1, "")))]
    #[case("## closed ##", Some((2, "closed")))]
    #[case("## C# ", Some((2, "C#")))]
    #[case("# ###", Some((1, "")))]
    #[case("   # indented", Some((1, "indented")))]
    #[case("    # code", None)]
    fn parse_heading(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(AtxHeading::parse(line), expected);
    }
}
