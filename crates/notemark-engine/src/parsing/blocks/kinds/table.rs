use crate::parsing::blocks::types::Alignment;

/// GFM pipe table rows.
pub struct TableRow;

impl TableRow {
    pub const PIPE: u8 = b'|';
    pub const ALIGN: char = ':';
    pub const RULE: char = '-';

    /// Whether the line holds an unescaped pipe.
    pub fn has_pipe(line: &str) -> bool {
        let bytes = line.as_bytes();
        bytes
            .iter()
            .enumerate()
            .any(|(i, &b)| b == Self::PIPE && (i == 0 || bytes[i - 1] != b'\\'))
    }

    /// Splits a row into trimmed cells. Outer pipes are optional and `\|`
    /// becomes a literal pipe inside a cell.
    pub fn cells(line: &str) -> Vec<String> {
        let mut row = line.trim();
        row = row.strip_prefix('|').unwrap_or(row);
        if row.ends_with('|') && !row.ends_with("\\|") {
            row = &row[..row.len() - 1];
        }

        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut chars = row.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&'|') => {
                    chars.next();
                    cell.push('|');
                }
                '|' => cells.push(std::mem::take(&mut cell).trim().to_string()),
                _ => cell.push(c),
            }
        }
        cells.push(cell.trim().to_string());
        cells
    }

    /// Parses a delimiter row such as `| :-- | :-: | --: |`.
    pub fn delimiter(line: &str) -> Option<Vec<Alignment>> {
        if !line.contains(Self::RULE) {
            return None;
        }
        Self::cells(line)
            .iter()
            .map(|cell| {
                let core = cell.trim_matches(Self::ALIGN);
                if core.is_empty() || !core.chars().all(|c| c == Self::RULE) {
                    return None;
                }
                Some(match (cell.starts_with(Self::ALIGN), cell.ends_with(Self::ALIGN)) {
                    (true, true) => Alignment::Center,
                    (true, false) => Alignment::Left,
                    (false, true) => Alignment::Right,
                    (false, false) => Alignment::None,
                })
            })
            .collect()
    }

    /// Recognizes a header row followed by a matching delimiter row.
    pub fn header(line: &str, next: &str) -> Option<(Vec<String>, Vec<Alignment>)> {
        if !Self::has_pipe(line) {
            return None;
        }
        let alignments = Self::delimiter(next)?;
        let cells = Self::cells(line);
        (cells.len() == alignments.len()).then_some((cells, alignments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_cells_with_and_without_outer_pipes() {
        assert_eq!(TableRow::cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(TableRow::cells("a|b"), vec!["a", "b"]);
        assert_eq!(TableRow::cells("| a | |"), vec!["a", ""]);
    }

    #[test]
    fn escaped_pipe_stays_in_cell() {
        assert_eq!(TableRow::cells(r"| a \| b | c |"), vec!["a | b", "c"]);
        assert!(!TableRow::has_pipe(r"a \| b"));
    }

    #[test]
    fn delimiter_alignments() {
        assert_eq!(
            TableRow::delimiter("| :-- | :-: | --: | --- |"),
            Some(vec![
                Alignment::Left,
                Alignment::Center,
                Alignment::Right,
                Alignment::None
            ])
        );
        assert_eq!(TableRow::delimiter("| a | --- |"), None);
        assert_eq!(TableRow::delimiter("| : |"), None);
    }

    #[test]
    fn header_needs_matching_column_count() {
        assert!(TableRow::header("a | b", "--- | ---").is_some());
        assert!(TableRow::header("a | b", "---").is_none());
        assert!(TableRow::header("a b", "---").is_none());
    }
}
