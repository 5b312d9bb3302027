use std::fmt::Write;

use crate::parsing::Document;
use crate::parsing::blocks::{Block, Table};
use crate::parsing::inline::Inline;

/// Renders a parsed document as an indented outline, one node per line.
///
/// Strings are shown with `{:?}` so whitespace and newlines stay visible.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        block_lines(&mut out, block, 0);
    }
    out
}

fn line(out: &mut String, depth: usize, text: impl AsRef<str>) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), text.as_ref());
}

fn block_lines(out: &mut String, block: &Block, depth: usize) {
    match block {
        Block::Paragraph(content) => {
            line(out, depth, "Paragraph");
            inline_lines(out, content, depth + 1);
        }
        Block::Heading { level, content } => {
            line(out, depth, format!("Heading({level})"));
            inline_lines(out, content, depth + 1);
        }
        Block::ThematicBreak => line(out, depth, "ThematicBreak"),
        Block::CodeBlock { lang, code } => {
            line(out, depth, format!("CodeBlock({lang:?}) {code:?}"));
        }
        Block::Html(raw) => line(out, depth, format!("Html {raw:?}")),
        Block::BlockQuote(blocks) => {
            line(out, depth, "BlockQuote");
            for child in blocks {
                block_lines(out, child, depth + 1);
            }
        }
        Block::List(list) => {
            line(
                out,
                depth,
                format!(
                    "List(ordered={}, start={}, tight={})",
                    list.ordered, list.start, list.tight
                ),
            );
            for item in &list.items {
                line(out, depth + 1, "Item");
                for child in item {
                    block_lines(out, child, depth + 2);
                }
            }
        }
        Block::Table(table) => table_lines(out, table, depth),
        Block::Spoiler(blocks) => {
            line(out, depth, "Spoiler");
            for child in blocks {
                block_lines(out, child, depth + 1);
            }
        }
        Block::Admonition { kind, blocks } => {
            line(out, depth, format!("Admonition({kind})"));
            for child in blocks {
                block_lines(out, child, depth + 1);
            }
        }
        Block::Checkbox { checked, text } => {
            line(out, depth, format!("Checkbox({checked}) {text:?}"));
        }
    }
}

fn table_lines(out: &mut String, table: &Table, depth: usize) {
    line(out, depth, format!("Table{:?}", table.alignments));
    line(out, depth + 1, "Header");
    for cell in &table.header {
        line(out, depth + 2, "Cell");
        inline_lines(out, cell, depth + 3);
    }
    for row in &table.rows {
        line(out, depth + 1, "Row");
        for cell in row {
            line(out, depth + 2, "Cell");
            inline_lines(out, cell, depth + 3);
        }
    }
}

fn inline_lines(out: &mut String, nodes: &[Inline], depth: usize) {
    for node in nodes {
        match node {
            Inline::Text(text) => line(out, depth, format!("Text {text:?}")),
            Inline::Code(code) => line(out, depth, format!("Code {code:?}")),
            Inline::Html(raw) => line(out, depth, format!("Html {raw:?}")),
            Inline::SoftBreak => line(out, depth, "SoftBreak"),
            Inline::HardBreak => line(out, depth, "HardBreak"),
            Inline::Emphasis(children) => {
                line(out, depth, "Emphasis");
                inline_lines(out, children, depth + 1);
            }
            Inline::Strong(children) => {
                line(out, depth, "Strong");
                inline_lines(out, children, depth + 1);
            }
            Inline::Strikethrough(children) => {
                line(out, depth, "Strikethrough");
                inline_lines(out, children, depth + 1);
            }
            Inline::Link {
                href,
                title,
                children,
            } => {
                line(out, depth, format!("Link {href:?} {title:?}"));
                inline_lines(out, children, depth + 1);
            }
            Inline::Image { src, alt, title } => {
                line(out, depth, format!("Image {src:?} {alt:?} {title:?}"));
            }
            Inline::ColoredText { color, text } => {
                line(out, depth, format!("ColoredText {color:?} {text:?}"));
            }
            Inline::Underline { options, text } => {
                line(out, depth, format!("Underline {:?} {text:?}", options.css()));
            }
            Inline::Autolink { href, text } => {
                line(out, depth, format!("Autolink {href:?} {text:?}"));
            }
        }
    }
}
