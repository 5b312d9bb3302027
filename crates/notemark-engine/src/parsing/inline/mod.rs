//! # Inline Parsing
//!
//! Cursor-based parsing of the raw text held by paragraphs, headings, table
//! cells and checkbox items.
//!
//! ## Dispatch
//!
//! At every position the registry's inline extensions get the first try, in
//! registration order. Each extension's probe result is cached and only
//! recomputed once the cursor moves past it, so literal text between
//! candidates is flushed in one run. When no extension matches, the baseline
//! rules run: escapes, entities, code spans, angle autolinks and raw HTML,
//! images, links, emphasis, strikethrough and line breaks.
//!
//! ## Modules
//!
//! - **`types`**: the [`Inline`] node enum
//! - **`kinds`**: baseline constructs owning their delimiters
//! - **`parser`**: [`parse_inline`] and its `try_*` helpers
//!
//! ## Raw Zones
//!
//! Code spans suppress everything inside them, including extensions:
//! `` `%red%x%%` `` is a code span, not colored text.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::Inline;
