//! # Dialect Extensions
//!
//! Each dialect feature is a small, stateless scanner registered once in a
//! process-wide [`Registry`]. Scanners come in two grammar levels:
//!
//! | Level | Trait | Tried at |
//! |-------|-------|----------|
//! | Block | [`BlockExtension`] | every block start, before baseline block rules |
//! | Inline | [`InlineExtension`] | every inline position, before baseline inline rules |
//!
//! ## Contract
//!
//! - `probe(text)` returns the earliest offset at which `tokenize` *might*
//!   succeed. It must never report a position later than a real match, but it
//!   may report false positives. Scanners only use it to decide how much
//!   literal text can be flushed in one go.
//! - `tokenize(text)` is anchored at offset 0. It returns `None` when the
//!   pattern does not start exactly there; on success the consumed length is
//!   at least one byte and ends on a char boundary.
//!
//! Matches that violate the length contract are discarded by the scanners and
//! treated as no-match, so a misbehaving extension cannot stall a parse.
//!
//! ## Registered Order
//!
//! Registration order is the tie-break between extensions whose patterns
//! start at the same offset: `colored_text`, `underline`, `spoiler`,
//! `admonition`, `checkbox`, `autolink`.

pub mod admonition;
pub mod autolink;
pub mod checkbox;
pub mod colored_text;
pub mod registry;
pub mod spoiler;
pub mod underline;

pub use admonition::{Admonition, AdmonitionKind};
pub use autolink::Autolink;
pub use checkbox::Checkbox;
pub use colored_text::ColoredText;
pub use registry::{Registry, RegistryBuilder, RegistryError, register_extensions, registry};
pub use spoiler::Spoiler;
pub use underline::{Underline, UnderlineOptions};

/// Grammar level an extension participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Block,
    Inline,
}

/// Raw output of a block extension, before nested content is scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockToken {
    /// `!>` body; the body is markdown and gets re-scanned as blocks.
    Spoiler { body: String },
    /// `!!! kind` header plus markdown body.
    Admonition { kind: AdmonitionKind, body: String },
    /// `- [ ] text` / `- [x] text`; the text is emitted verbatim.
    Checkbox { checked: bool, text: String },
}

/// Raw output of an inline extension. Span text is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken {
    ColoredText { color: String, text: String },
    Underline { options: UnderlineOptions, text: String },
    /// `href` may differ from `text` when a scheme was synthesized.
    Autolink { href: String, text: String },
}

pub trait BlockExtension: Send + Sync {
    fn name(&self) -> &'static str;

    /// Earliest offset in `src` where this extension might start.
    fn probe(&self, src: &str) -> Option<usize>;

    /// Anchored match at offset 0 of `src`.
    fn tokenize(&self, src: &str) -> Option<(BlockToken, usize)>;
}

pub trait InlineExtension: Send + Sync {
    fn name(&self) -> &'static str;

    /// Earliest offset in `src` where this extension might start.
    fn probe(&self, src: &str) -> Option<usize>;

    /// Anchored match at offset 0 of `src`.
    fn tokenize(&self, src: &str) -> Option<(InlineToken, usize)>;

    /// Whether the extension may fire inside the text of a link.
    fn allowed_in_link(&self) -> bool {
        true
    }
}

/// A registered extension, tagged with its grammar level.
pub enum Extension {
    Block(Box<dyn BlockExtension>),
    Inline(Box<dyn InlineExtension>),
}

impl Extension {
    pub fn name(&self) -> &'static str {
        match self {
            Extension::Block(ext) => ext.name(),
            Extension::Inline(ext) => ext.name(),
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Extension::Block(_) => Level::Block,
            Extension::Inline(_) => Level::Inline,
        }
    }
}

impl std::fmt::Debug for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension")
            .field("name", &self.name())
            .field("level", &self.level())
            .finish()
    }
}

/// Checks a tokenize result against the progress contract.
///
/// Returns the consumed length if it is usable for advancing a scanner over
/// `src`, `None` otherwise.
pub(crate) fn checked_len(name: &str, src: &str, len: usize) -> Option<usize> {
    if len == 0 || len > src.len() || !src.is_char_boundary(len) {
        log::warn!("extension `{name}` returned unusable match length {len}, ignoring match");
        return None;
    }
    Some(len)
}

/// Returns the remainder of `src` after its first char, with its offset.
///
/// Open-ended bodies must hold at least one char before a terminator can be
/// recognized; this is the shared helper for that rule.
pub(crate) fn after_first_char(src: &str) -> Option<usize> {
    src.chars().next().map(char::len_utf8)
}

/// Length of an open-ended block body: up to the first run of two or more
/// newlines that starts after the body's first char, or the end of input.
pub(crate) fn open_ended_body_len(body: &str) -> usize {
    let Some(first) = after_first_char(body) else {
        return 0;
    };
    match body[first..].find("\n\n") {
        Some(idx) => first + idx,
        None => body.len(),
    }
}
