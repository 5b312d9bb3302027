/// Splits off the first line of `src`.
///
/// Returns the line without its newline and the number of bytes consumed,
/// newline included.
pub fn first_line(src: &str) -> (&str, usize) {
    match src.find('\n') {
        Some(idx) => (&src[..idx], idx + 1),
        None => (src, src.len()),
    }
}

/// The line after the first one, if any.
pub fn second_line(src: &str) -> Option<&str> {
    let (_, next) = first_line(src);
    (next < src.len()).then(|| first_line(&src[next..]).0)
}

pub fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

/// Number of leading spaces. Leading tabs were expanded during input
/// normalization.
pub fn indent(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Removes up to `n` leading spaces.
pub fn strip_indent(line: &str, n: usize) -> &str {
    let skip = indent(line).min(n);
    &line[skip..]
}

/// The line with at most three leading spaces removed, or `None` if it is
/// indented four or more (which makes it indented code, not a block opener).
pub fn opener_body(line: &str) -> Option<&str> {
    let ind = indent(line);
    (ind <= 3).then(|| &line[ind..])
}
