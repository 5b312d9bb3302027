use crate::parsing::Document;
use crate::parsing::blocks::Block;
use crate::parsing::inline::Inline;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Text nodes are never empty and never adjacent to each other
/// - Heading levels are within 1..=6
/// - Every table row has as many cells as the header
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for block in &doc.blocks {
        check_block(block);
    }
}

fn check_block(block: &Block) {
    match block {
        Block::Paragraph(content) => check_inlines(content),
        Block::Checkbox { .. } => {}
        Block::Heading { level, content } => {
            assert!((1..=6).contains(level), "heading level out of range: {level}");
            check_inlines(content);
        }
        Block::ThematicBreak | Block::CodeBlock { .. } | Block::Html(_) => {}
        Block::BlockQuote(blocks) | Block::Spoiler(blocks) | Block::Admonition { blocks, .. } => {
            blocks.iter().for_each(check_block);
        }
        Block::List(list) => list.items.iter().flatten().for_each(check_block),
        Block::Table(table) => {
            table.header.iter().for_each(|cell| check_inlines(cell));
            for row in &table.rows {
                assert_eq!(
                    row.len(),
                    table.header.len(),
                    "table row width differs from header: {row:?}"
                );
                row.iter().for_each(|cell| check_inlines(cell));
            }
        }
    }
}

fn check_inlines(nodes: &[Inline]) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [Inline::Text(_), Inline::Text(_)]),
            "adjacent text nodes: {pair:?}"
        );
    }
    for node in nodes {
        match node {
            Inline::Text(text) => assert!(!text.is_empty(), "empty text node"),
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Strikethrough(children)
            | Inline::Link { children, .. } => check_inlines(children),
            _ => {}
        }
    }
}
