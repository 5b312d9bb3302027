//! # Block Parsing
//!
//! A line-oriented scanner over the normalized document.
//!
//! ## Scan Loop
//!
//! At each line start the [`BlockScanner`] first offers the remaining text to
//! every block extension in registration order. The first anchored match wins
//! and its consumed length is skipped. Otherwise the baseline rules run in
//! fixed priority order (see [`scanner`]), each of which consumes at least
//! one line.
//!
//! ## Modules
//!
//! - **`types`**: the block tree (`Block`, `List`, `Table`, `Alignment`)
//! - **`kinds`**: block-specific types that own their delimiters
//! - **`lines`**: line splitting and indentation helpers
//! - **`scanner`**: `BlockScanner`, the scan loop and container recursion
//!
//! ## Key Invariants
//!
//! - Every step advances the scan position, so the loop always terminates
//! - Container bodies (quotes, list items, spoilers, admonitions) are scanned
//!   by the same scanner with the same registry, one level deeper
//! - Code blocks and HTML blocks are raw zones: no inline parsing inside

pub mod kinds;
pub mod lines;
pub mod scanner;
pub mod types;

pub use scanner::BlockScanner;
pub use types::{Alignment, Block, List, RawBlock, Table};
