use crate::extensions::AdmonitionKind;
use crate::parsing::inline::Inline;

/// A block in the document tree.
///
/// `T` is the inline content of leaf blocks: raw `String` while blocks are
/// being scanned, parsed `Vec<Inline>` once the whole document is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<T = Vec<Inline>> {
    Paragraph(T),
    Heading {
        /// 1 to 6.
        level: u8,
        content: T,
    },
    ThematicBreak,
    /// Fenced or indented code. Raw zone.
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    /// Raw HTML passed through verbatim.
    Html(String),
    BlockQuote(Vec<Block<T>>),
    List(List<T>),
    Table(Table<T>),
    Spoiler(Vec<Block<T>>),
    Admonition {
        kind: AdmonitionKind,
        blocks: Vec<Block<T>>,
    },
    /// `text` is emitted verbatim.
    Checkbox {
        checked: bool,
        text: String,
    },
}

/// Block tree as produced by the scanner, before inline parsing.
pub type RawBlock = Block<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T = Vec<Inline>> {
    pub ordered: bool,
    /// First item number for ordered lists.
    pub start: u64,
    /// Tight lists render item paragraphs without `<p>` wrappers.
    pub tight: bool,
    pub items: Vec<Vec<Block<T>>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T = Vec<Inline>> {
    pub alignments: Vec<Alignment>,
    pub header: Vec<T>,
    /// Every row has exactly `header.len()` cells.
    pub rows: Vec<Vec<T>>,
}

impl<T> Block<T> {
    /// Converts the inline content of every leaf, keeping the tree shape.
    pub fn map_inline<U, F>(self, f: &mut F) -> Block<U>
    where
        F: FnMut(T) -> U,
    {
        let map_all = |blocks: Vec<Block<T>>, f: &mut F| -> Vec<Block<U>> {
            blocks.into_iter().map(|b| b.map_inline(f)).collect()
        };
        match self {
            Block::Paragraph(content) => Block::Paragraph(f(content)),
            Block::Heading { level, content } => Block::Heading {
                level,
                content: f(content),
            },
            Block::ThematicBreak => Block::ThematicBreak,
            Block::CodeBlock { lang, code } => Block::CodeBlock { lang, code },
            Block::Html(html) => Block::Html(html),
            Block::BlockQuote(blocks) => Block::BlockQuote(map_all(blocks, f)),
            Block::List(list) => Block::List(List {
                ordered: list.ordered,
                start: list.start,
                tight: list.tight,
                items: list
                    .items
                    .into_iter()
                    .map(|item| map_all(item, f))
                    .collect(),
            }),
            Block::Table(table) => Block::Table(Table {
                alignments: table.alignments,
                header: table.header.into_iter().map(&mut *f).collect(),
                rows: table
                    .rows
                    .into_iter()
                    .map(|row| row.into_iter().map(&mut *f).collect())
                    .collect(),
            }),
            Block::Spoiler(blocks) => Block::Spoiler(map_all(blocks, f)),
            Block::Admonition { kind, blocks } => Block::Admonition {
                kind,
                blocks: map_all(blocks, f),
            },
            Block::Checkbox { checked, text } => Block::Checkbox { checked, text },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_inline_reaches_nested_leaves() {
        let raw: RawBlock = Block::Spoiler(vec![
            Block::Paragraph("a".to_string()),
            Block::List(List {
                ordered: false,
                start: 1,
                tight: true,
                items: vec![vec![Block::Heading {
                    level: 2,
                    content: "b".to_string(),
                }]],
            }),
        ]);
        let mapped = raw.map_inline(&mut |s: String| s.len());
        assert_eq!(
            mapped,
            Block::Spoiler(vec![
                Block::Paragraph(1),
                Block::List(List {
                    ordered: false,
                    start: 1,
                    tight: true,
                    items: vec![vec![Block::Heading {
                        level: 2,
                        content: 1
                    }]],
                }),
            ])
        );
    }

    #[test]
    fn map_inline_keeps_table_shape() {
        let raw: RawBlock = Block::Table(Table {
            alignments: vec![Alignment::Left, Alignment::None],
            header: vec!["h1".into(), "h2".into()],
            rows: vec![vec!["a".into(), "".into()]],
        });
        let mut calls = 0;
        let mapped = raw.map_inline(&mut |s: String| {
            calls += 1;
            s.to_uppercase()
        });
        assert_eq!(calls, 4);
        let Block::Table(table) = mapped else {
            panic!("expected table");
        };
        assert_eq!(table.header, vec!["H1".to_string(), "H2".to_string()]);
    }

    #[test]
    fn alignment_attrs() {
        assert_eq!(Alignment::None.as_attr(), None);
        assert_eq!(Alignment::Center.as_attr(), Some("center"));
    }
}
