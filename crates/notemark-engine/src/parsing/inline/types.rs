use crate::extensions::UnderlineOptions;

/// A parsed inline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text, unescaped.
    Text(String),
    /// A code span. Raw zone: nothing inside is parsed.
    Code(String),
    /// Raw inline HTML or a character reference, emitted verbatim.
    Html(String),
    SoftBreak,
    HardBreak,
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        href: String,
        title: Option<String>,
        children: Vec<Inline>,
    },
    Image {
        src: String,
        /// Plain-text rendering of the bracketed description.
        alt: String,
        title: Option<String>,
    },
    /// Dialect spans carry their text verbatim: it is neither parsed nor
    /// escaped.
    ColoredText {
        color: String,
        text: String,
    },
    Underline {
        options: UnderlineOptions,
        text: String,
    },
    /// A bare URL or domain. `href` has a scheme even when `text` does not.
    Autolink {
        href: String,
        text: String,
    },
}

impl Inline {
    /// Concatenated text content, with markup dropped. Used for image alt
    /// text.
    pub fn plain_text(nodes: &[Inline]) -> String {
        let mut out = String::new();
        for node in nodes {
            node.push_plain(&mut out);
        }
        out
    }

    fn push_plain(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Autolink { text, .. }
            | Inline::ColoredText { text, .. }
            | Inline::Underline { text, .. } => out.push_str(text),
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::Html(_) => {}
            Inline::SoftBreak | Inline::HardBreak => out.push(' '),
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Strikethrough(children)
            | Inline::Link { children, .. } => {
                for child in children {
                    child.push_plain(out);
                }
            }
        }
    }
}
