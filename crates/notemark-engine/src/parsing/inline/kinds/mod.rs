//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and the small
//! anchored scanners for them. The parser calls these; it never hardcodes
//! `` ` ``, `[` or `<` handling itself.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK` runs; raw zone that suppresses other parsing
//! - **`Delimiter`**: `*`, `_` and `~` runs with their flanking rules
//! - **`Escape`** / **`Entity`**: backslash escapes and character references
//! - **`HtmlTag`** / **`AngleLink`**: everything that starts with `<`
//! - **`Link`**: bracketed labels, destinations and titles

pub mod angle_link;
pub mod code_span;
pub mod delimiter;
pub mod escape;
pub mod html_tag;
pub mod link;

pub use angle_link::AngleLink;
pub use code_span::CodeSpan;
pub use delimiter::Delimiter;
pub use escape::{Entity, Escape};
pub use html_tag::HtmlTag;
pub use link::Link;
