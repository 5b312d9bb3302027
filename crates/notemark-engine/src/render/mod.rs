//! # Rendering
//!
//! `render` is the whole pipeline in one call:
//!
//! ```text
//! source ─► parse_document ─► render_html ─► line_breaks::normalize ─► HTML
//! ```
//!
//! Rendering is pure and total: every input, including the empty string,
//! produces an HTML string, and nothing is cached between calls. The output
//! is not sanitized; raw HTML in the source reaches the output unchanged.

pub mod html;
pub mod line_breaks;

pub use html::render_html;
pub use line_breaks::normalize;

use crate::extensions::{Registry, registry};
use crate::parsing::parse_document;

/// Renders dialect markdown to HTML with the shared registry.
pub fn render(src: &str) -> String {
    render_with(registry(), src)
}

/// Renders with an explicit registry.
pub fn render_with(registry: &Registry, src: &str) -> String {
    normalize(&render_raw_with(registry, src))
}

/// Renders without the line-break post-pass.
pub fn render_raw(src: &str) -> String {
    render_raw_with(registry(), src)
}

fn render_raw_with(registry: &Registry, src: &str) -> String {
    let doc = parse_document(src, registry);
    let html = render_html(&doc);
    log::trace!(
        "rendered {} bytes of markdown into {} top-level blocks, {} bytes of HTML",
        src.len(),
        doc.blocks.len(),
        html.len()
    );
    html
}
