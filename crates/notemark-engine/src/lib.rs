//! # notemark-engine
//!
//! Renders a markdown dialect (colored text, styled underline, spoilers,
//! admonitions, task checkboxes and bare-URL autolinks on top of
//! CommonMark-style markdown) to HTML, and stores shared notes on disk.
//!
//! ```
//! let html = notemark_engine::render("%red% hi %%");
//! assert!(html.contains(r#"<span style="color:red;">hi</span>"#));
//! ```

pub mod extensions;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

pub use extensions::{Registry, register_extensions, registry};
pub use io::{NoteStore, StoreError};
pub use models::Note;
pub use parsing::{Document, parse_document};
pub use render::{normalize, render, render_html, render_raw, render_with};
