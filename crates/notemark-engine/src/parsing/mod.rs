//! # Parsing
//!
//! Two passes over a normalized source string:
//!
//! 1. [`blocks`] scans lines into a tree of [`Block<String>`](blocks::Block)
//!    whose leaves still hold raw inline text, collecting link reference
//!    definitions on the way.
//! 2. [`inline`] parses every raw leaf into [`Inline`](inline::Inline) nodes,
//!    now that every reference definition in the document is known.
//!
//! Both passes try the registry's extensions before their baseline rules and
//! cap recursion at [`MAX_NESTING`], so parsing is total on any input.

pub mod blocks;
pub mod cursor;
pub mod inline;
pub mod refs;

#[cfg(test)]
mod tests;

use crate::extensions::Registry;

use blocks::{Block, BlockScanner};
use refs::RefMap;

/// Deepest level of recursive content (quotes, lists, spoilers, admonitions,
/// inline containers) that is parsed structurally. Deeper content is kept as
/// plain text.
pub const MAX_NESTING: usize = 32;

/// Column width of a tab stop when expanding leading tabs.
pub const TAB_STOP: usize = 4;

/// A parsed document: top-level blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Normalizes line endings, drops a leading BOM and expands leading tabs.
pub fn normalize_input(src: &str) -> String {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    let unified = src.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    for (idx, line) in unified.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let mut col = 0;
        let mut body = line;
        while let Some(rest) = body.strip_prefix([' ', '\t']) {
            if body.starts_with('\t') {
                let width = TAB_STOP - col % TAB_STOP;
                out.extend(std::iter::repeat_n(' ', width));
                col += width;
            } else {
                out.push(' ');
                col += 1;
            }
            body = rest;
        }
        out.push_str(body);
    }
    out
}

/// Parses `src` with the extensions in `registry`.
pub fn parse_document(src: &str, registry: &Registry) -> Document {
    let text = normalize_input(src);
    let mut refs = RefMap::default();
    let raw = BlockScanner::new(registry, &mut refs).scan(&text, 0);
    log::trace!(
        "scanned {} top-level blocks, {} link references",
        raw.len(),
        refs.len()
    );

    let blocks = raw
        .into_iter()
        .map(|block| block.map_inline(&mut |text| inline::parse_inline(&text, registry, &refs)))
        .collect();
    Document { blocks }
}
