//! Bare URL and domain autolinks.

use std::sync::OnceLock;

use regex::Regex;

use super::{InlineExtension, InlineToken};

/// Turns `https://…`, `www.…` and bare `domain.tld` text into links.
///
/// The match runs to the next whitespace, so trailing punctuation stays part
/// of the link. Text without an explicit http(s) scheme gets `https://`
/// prepended in the href. A candidate right after `@` is the host of an email
/// address and is left alone.
pub struct Autolink;

const START: &str = r"(?i)(?:https?://|www\.|[a-z0-9-]+\.[a-z]{2,})";

fn start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(START).expect("autolink start pattern is valid"))
}

fn anchored_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^{START}\S*")).expect("autolink pattern is valid")
    })
}

impl Autolink {
    pub const DEFAULT_SCHEME: &'static str = "https://";

    /// Whether `text` already carries an http or https scheme.
    pub fn has_scheme(text: &str) -> bool {
        ["http://", "https://"].iter().any(|scheme| {
            text.get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        })
    }

    pub fn href_for(text: &str) -> String {
        if Self::has_scheme(text) {
            text.to_string()
        } else {
            format!("{}{text}", Self::DEFAULT_SCHEME)
        }
    }
}

impl InlineExtension for Autolink {
    fn name(&self) -> &'static str {
        "autolink"
    }

    fn probe(&self, src: &str) -> Option<usize> {
        start_re()
            .find_iter(src)
            .map(|m| m.start())
            .find(|&at| !src[..at].ends_with('@'))
    }

    fn tokenize(&self, src: &str) -> Option<(InlineToken, usize)> {
        let m = anchored_re().find(src)?;
        let text = m.as_str();
        let token = InlineToken::Autolink {
            href: Self::href_for(text),
            text: text.to_string(),
        };
        Some((token, m.end()))
    }

    fn allowed_in_link(&self) -> bool {
        false
    }
}
