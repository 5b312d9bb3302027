use crate::parsing::blocks::lines::{first_line, is_blank, opener_body};
use crate::parsing::inline::kinds::HtmlTag;

/// How a raw HTML block ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlBlock {
    /// `<script>`, `<pre>`, `<style>`, `<textarea>`: runs to the closing tag.
    Raw(&'static str),
    /// `<!-- ... -->`.
    Comment,
    /// A known block-level tag: runs to a blank line.
    Known,
    /// Any single complete tag alone on its line: runs to a blank line.
    Complete,
}

impl HtmlBlock {
    const RAW_TAGS: [(&'static str, &'static str); 4] = [
        ("script", "</script>"),
        ("pre", "</pre>"),
        ("style", "</style>"),
        ("textarea", "</textarea>"),
    ];

    const BLOCK_TAGS: &'static [&'static str] = &[
        "address", "article", "aside", "base", "basefont", "blockquote", "body", "caption",
        "center", "col", "colgroup", "dd", "details", "dialog", "dir", "div", "dl", "dt",
        "fieldset", "figcaption", "figure", "footer", "form", "frame", "frameset", "h1", "h2",
        "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "iframe", "legend", "li", "link",
        "main", "menu", "menuitem", "nav", "noframes", "ol", "optgroup", "option", "p", "param",
        "search", "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "title",
        "tr", "track", "ul",
    ];

    /// Classifies a line that may open an HTML block.
    pub fn start(line: &str) -> Option<Self> {
        let body = opener_body(line)?;
        if !body.starts_with('<') {
            return None;
        }
        if body.starts_with("<!--") {
            return Some(HtmlBlock::Comment);
        }

        let (closing, name_start) = match body.strip_prefix("</") {
            Some(_) => (true, 2),
            None => (false, 1),
        };
        let name_len = body[name_start..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-')
            .count();
        if name_len == 0 {
            return None;
        }
        let name = body[name_start..name_start + name_len].to_ascii_lowercase();
        let after = &body[name_start + name_len..];
        let ends_name = after.is_empty() || after.starts_with([' ', '\t', '>']) || after.starts_with("/>");

        if !closing && ends_name {
            if let Some(&(_, end)) = Self::RAW_TAGS.iter().find(|(tag, _)| *tag == name) {
                return Some(HtmlBlock::Raw(end));
            }
        }
        if ends_name && Self::BLOCK_TAGS.contains(&name.as_str()) {
            return Some(HtmlBlock::Known);
        }
        let tag_len = HtmlTag::open_len(body).or_else(|| HtmlTag::close_len(body))?;
        is_blank(&body[tag_len..]).then_some(HtmlBlock::Complete)
    }

    pub fn can_interrupt_paragraph(self) -> bool {
        self != HtmlBlock::Complete
    }

    /// Length of the block starting at the beginning of `src`.
    pub fn scan_len(self, src: &str) -> usize {
        let end_marker = match self {
            HtmlBlock::Raw(end) => Some(end),
            HtmlBlock::Comment => Some("-->"),
            HtmlBlock::Known | HtmlBlock::Complete => None,
        };
        let mut p = 0;
        while p < src.len() {
            let (line, next) = first_line(&src[p..]);
            match end_marker {
                Some(end) => {
                    p += next;
                    if line.to_ascii_lowercase().contains(end) {
                        break;
                    }
                }
                None => {
                    if is_blank(line) {
                        break;
                    }
                    p += next;
                }
            }
        }
        p
    }
}
