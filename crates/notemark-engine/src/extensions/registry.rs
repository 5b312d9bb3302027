use std::collections::HashSet;
use std::sync::OnceLock;

use super::{
    Admonition, Autolink, BlockExtension, Checkbox, ColoredText, Extension, InlineExtension, Level,
    Spoiler, Underline,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("extension `{0}` is registered more than once")]
    DuplicateName(&'static str),
}

/// Ordered, immutable set of dialect extensions.
///
/// A registry is assembled once by [`RegistryBuilder`] and never mutated
/// afterwards. Scanners only ever borrow it.
#[derive(Debug)]
pub struct Registry {
    extensions: Vec<Extension>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// A registry with no extensions: plain markdown only.
    pub fn empty() -> Self {
        Self { extensions: vec![] }
    }

    /// All extensions of `level`, in registration order.
    pub fn lookup(&self, level: Level) -> Vec<&Extension> {
        self.extensions
            .iter()
            .filter(|ext| ext.level() == level)
            .collect()
    }

    /// Block extensions in registration order.
    pub fn block_extensions(&self) -> impl Iterator<Item = &(dyn BlockExtension + 'static)> {
        self.extensions.iter().filter_map(|ext| match ext {
            Extension::Block(b) => Some(b.as_ref()),
            Extension::Inline(_) => None,
        })
    }

    /// Inline extensions in registration order.
    pub fn inline_extensions(&self) -> impl Iterator<Item = &(dyn InlineExtension + 'static)> {
        self.extensions.iter().filter_map(|ext| match ext {
            Extension::Inline(i) => Some(i.as_ref()),
            Extension::Block(_) => None,
        })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extensions.iter().map(Extension::name).collect()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    extensions: Vec<Extension>,
}

impl RegistryBuilder {
    pub fn block(mut self, ext: impl BlockExtension + 'static) -> Self {
        self.extensions.push(Extension::Block(Box::new(ext)));
        self
    }

    pub fn inline(mut self, ext: impl InlineExtension + 'static) -> Self {
        self.extensions.push(Extension::Inline(Box::new(ext)));
        self
    }

    /// Freezes the builder. Names must be unique across both levels.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut seen = HashSet::new();
        for ext in &self.extensions {
            if !seen.insert(ext.name()) {
                return Err(RegistryError::DuplicateName(ext.name()));
            }
        }
        log::debug!(
            "extension registry built: [{}]",
            self.extensions
                .iter()
                .map(Extension::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Registry {
            extensions: self.extensions,
        })
    }
}

/// Assembles the dialect in its documented order.
///
/// Prefer [`registry`], which calls this exactly once per process.
pub fn register_extensions() -> Registry {
    let extensions = vec![
        Extension::Inline(Box::new(ColoredText)),
        Extension::Inline(Box::new(Underline)),
        Extension::Block(Box::new(Spoiler)),
        Extension::Block(Box::new(Admonition)),
        Extension::Block(Box::new(Checkbox)),
        Extension::Inline(Box::new(Autolink)),
    ];
    log::debug!("registering {} dialect extensions", extensions.len());
    Registry { extensions }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide dialect registry shared by every render call.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(register_extensions)
}
