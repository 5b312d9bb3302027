//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The scanner asks
//! these types whether a line opens, continues or closes a block; it never
//! hardcodes `>`, `#` or fence characters itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod html_block;
pub mod link_ref_def;
pub mod list_marker;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use heading::AtxHeading;
pub use html_block::HtmlBlock;
pub use link_ref_def::LinkRefDef;
pub use list_marker::ListMarker;
pub use paragraph::Paragraph;
pub use table::TableRow;
pub use thematic_break::ThematicBreak;
