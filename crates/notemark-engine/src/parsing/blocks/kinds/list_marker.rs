use crate::parsing::blocks::lines::{indent, is_blank};

/// A list item marker at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// The bullet character, or the `.`/`)` delimiter of an ordered marker.
    pub delim: u8,
    pub start: u64,
    /// Byte offset in the line where the item's content starts.
    pub content_offset: usize,
    /// Indentation continuation lines need to belong to this item.
    pub content_indent: usize,
    /// True when nothing follows the marker on its line.
    pub empty: bool,
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMS: [u8; 2] = [b'.', b')'];
    pub const MAX_DIGITS: usize = 9;
    /// Content indented further than this after the marker is an indented
    /// code block inside the item.
    pub const MAX_GAP: usize = 4;

    pub fn parse(line: &str) -> Option<Self> {
        let ind = indent(line);
        if ind > 3 {
            return None;
        }
        let bytes = &line.as_bytes()[ind..];
        let first = *bytes.first()?;

        let (ordered, delim, start, marker_len) = if Self::BULLETS.contains(&first) {
            (false, first, 1, 1)
        } else {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            let delim = *bytes.get(digits)?;
            if !Self::ORDERED_DELIMS.contains(&delim) {
                return None;
            }
            let start = line[ind..ind + digits].parse().ok()?;
            (true, delim, start, digits + 1)
        };

        let marker_end = ind + marker_len;
        let rest = &line[marker_end..];
        if is_blank(rest) {
            return Some(Self {
                ordered,
                delim,
                start,
                content_offset: line.len(),
                content_indent: marker_end + 1,
                empty: true,
            });
        }
        let gap = indent(rest);
        if gap == 0 {
            return None;
        }
        let gap = if gap > Self::MAX_GAP { 1 } else { gap };
        Some(Self {
            ordered,
            delim,
            start,
            content_offset: marker_end + gap,
            content_indent: marker_end + gap,
            empty: false,
        })
    }

    /// Whether an item with `other`'s marker continues this list.
    pub fn same_list(&self, other: &ListMarker) -> bool {
        self.ordered == other.ordered && self.delim == other.delim
    }

    /// Only non-empty items, and ordered items numbered 1, may interrupt a
    /// paragraph.
    pub fn can_interrupt_paragraph(&self) -> bool {
        !self.empty && (!self.ordered || self.start == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bullet_marker() {
        let m = ListMarker::parse("- item").unwrap();
        assert!(!m.ordered);
        assert_eq!(m.delim, b'-');
        assert_eq!(m.content_offset, 2);
        assert_eq!(m.content_indent, 2);
    }

    #[test]
    fn ordered_marker() {
        let m = ListMarker::parse("12) item").unwrap();
        assert!(m.ordered);
        assert_eq!(m.start, 12);
        assert_eq!(m.delim, b')');
        assert_eq!(m.content_indent, 4);
    }

    #[test]
    fn wide_gap_means_code_in_item() {
        let m = ListMarker::parse("-      code").unwrap();
        assert_eq!(m.content_indent, 2);
    }

    #[test]
    fn empty_item() {
        let m = ListMarker::parse("*").unwrap();
        assert!(m.empty);
        assert!(!m.can_interrupt_paragraph());
    }

    #[test]
    fn not_markers() {
        assert_eq!(ListMarker::parse("-item"), None);
        assert_eq!(ListMarker::parse("1.5 apples"), None);
        assert_eq!(ListMarker::parse("1234567890. x"), None);
        assert_eq!(ListMarker::parse("    - code"), None);
    }

    #[test]
    fn ordered_lists_interrupt_only_from_one() {
        assert!(ListMarker::parse("1. a").unwrap().can_interrupt_paragraph());
        assert!(!ListMarker::parse("2. a").unwrap().can_interrupt_paragraph());
    }

    #[test]
    fn same_list_requires_same_marker() {
        let dash = ListMarker::parse("- a").unwrap();
        let star = ListMarker::parse("* a").unwrap();
        assert!(dash.same_list(&ListMarker::parse("- b").unwrap()));
        assert!(!dash.same_list(&star));
    }
}
