use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::extensions::{Admonition, Checkbox, ColoredText, Spoiler};
use crate::parsing::Document;
use crate::parsing::blocks::{Alignment, Block, List, Table};
use crate::parsing::inline::Inline;

/// Attributes every rendered link carries: new browsing context, no opener,
/// no referrer.
pub const LINK_ISOLATION: &str = r#" target="_blank" rel="noopener noreferrer""#;

/// Emits HTML for a parsed document.
///
/// Literal text and attribute values are escaped. Raw HTML blocks, inline
/// tags and entities are emitted verbatim.
pub fn render_html(doc: &Document) -> String {
    let mut out = String::new();
    emit_blocks(&mut out, &doc.blocks);
    out
}

fn emit_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        emit_block(out, block);
    }
}

fn emit_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph(content) => {
            out.push_str("<p>");
            emit_inlines(out, content);
            out.push_str("</p>\n");
        }
        Block::Heading { level, content } => {
            out.push_str(&format!("<h{level}>"));
            emit_inlines(out, content);
            out.push_str(&format!("</h{level}>\n"));
        }
        Block::ThematicBreak => out.push_str("<hr>\n"),
        Block::CodeBlock { lang, code } => {
            match lang {
                Some(lang) => out.push_str(&format!(
                    r#"<pre><code class="language-{}">"#,
                    encode_double_quoted_attribute(lang)
                )),
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&encode_text(code));
            out.push_str("</code></pre>\n");
        }
        Block::Html(raw) => {
            out.push_str(raw);
            if !raw.ends_with('\n') {
                out.push('\n');
            }
        }
        Block::BlockQuote(blocks) => {
            out.push_str("<blockquote>\n");
            emit_blocks(out, blocks);
            out.push_str("</blockquote>\n");
        }
        Block::List(list) => emit_list(out, list),
        Block::Table(table) => emit_table(out, table),
        Block::Spoiler(blocks) => {
            out.push_str(Spoiler::OPEN_TAG);
            emit_blocks(out, blocks);
            out.push_str(Spoiler::CLOSE_TAG);
            out.push('\n');
        }
        Block::Admonition { kind, blocks } => {
            out.push_str(&Admonition::open_tag(*kind));
            emit_blocks(out, blocks);
            out.push_str(Admonition::CLOSE_TAG);
            out.push('\n');
        }
        Block::Checkbox { checked, text } => {
            out.push_str(r#"<div class="checkbox-item">"#);
            out.push_str(Checkbox::input_tag(*checked));
            out.push(' ');
            out.push_str(text);
            out.push_str("</div>\n");
        }
    }
}

fn emit_list(out: &mut String, list: &List) {
    let tag = if list.ordered { "ol" } else { "ul" };
    if list.ordered && list.start != 1 {
        out.push_str(&format!("<ol start=\"{}\">\n", list.start));
    } else {
        out.push_str(&format!("<{tag}>\n"));
    }

    for item in &list.items {
        out.push_str("<li>");
        for (idx, block) in item.iter().enumerate() {
            match block {
                // Tight items show their paragraphs without wrappers.
                Block::Paragraph(content) if list.tight => {
                    emit_inlines(out, content);
                    if idx + 1 < item.len() {
                        out.push('\n');
                    }
                }
                _ => {
                    if idx == 0 {
                        out.push('\n');
                    }
                    emit_block(out, block);
                }
            }
        }
        out.push_str("</li>\n");
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn emit_table(out: &mut String, table: &Table) {
    out.push_str("<table>\n<thead>\n");
    emit_row(out, "th", &table.alignments, &table.header);
    out.push_str("</thead>\n");
    if !table.rows.is_empty() {
        out.push_str("<tbody>\n");
        for row in &table.rows {
            emit_row(out, "td", &table.alignments, row);
        }
        out.push_str("</tbody>\n");
    }
    out.push_str("</table>\n");
}

fn emit_row(out: &mut String, tag: &str, alignments: &[Alignment], cells: &[Vec<Inline>]) {
    out.push_str("<tr>\n");
    for (idx, cell) in cells.iter().enumerate() {
        match alignments.get(idx).and_then(|a| a.as_attr()) {
            Some(align) => out.push_str(&format!("<{tag} align=\"{align}\">")),
            None => out.push_str(&format!("<{tag}>")),
        }
        emit_inlines(out, cell);
        out.push_str(&format!("</{tag}>\n"));
    }
    out.push_str("</tr>\n");
}

fn emit_inlines(out: &mut String, nodes: &[Inline]) {
    for node in nodes {
        emit_inline(out, node);
    }
}

fn emit_inline(out: &mut String, node: &Inline) {
    match node {
        Inline::Text(text) => out.push_str(&encode_text(text)),
        Inline::Code(code) => {
            out.push_str("<code>");
            out.push_str(&encode_text(code));
            out.push_str("</code>");
        }
        Inline::Html(raw) => out.push_str(raw),
        Inline::SoftBreak => out.push('\n'),
        Inline::HardBreak => out.push_str("<br>"),
        Inline::Emphasis(children) => wrap(out, "em", children),
        Inline::Strong(children) => wrap(out, "strong", children),
        Inline::Strikethrough(children) => wrap(out, "del", children),
        Inline::Link {
            href,
            title,
            children,
        } => {
            open_link(out, href, title.as_deref());
            emit_inlines(out, children);
            out.push_str("</a>");
        }
        Inline::Image { src, alt, title } => {
            out.push_str(&format!(
                r#"<img src="{}" alt="{}""#,
                encode_href(src),
                encode_double_quoted_attribute(alt)
            ));
            if let Some(title) = title {
                out.push_str(&format!(r#" title="{}""#, encode_double_quoted_attribute(title)));
            }
            out.push('>');
        }
        Inline::ColoredText { color, text } => styled_span(out, &ColoredText::css(color), text),
        Inline::Underline { options, text } => styled_span(out, &options.css(), text),
        Inline::Autolink { href, text } => {
            open_link(out, href, None);
            out.push_str(&encode_text(text));
            out.push_str("</a>");
        }
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Inline]) {
    out.push_str(&format!("<{tag}>"));
    emit_inlines(out, children);
    out.push_str(&format!("</{tag}>"));
}

/// The body goes out as written: no markdown, no escaping.
fn styled_span(out: &mut String, css: &str, text: &str) {
    out.push_str(&format!(
        r#"<span style="{}">"#,
        encode_double_quoted_attribute(css)
    ));
    out.push_str(text);
    out.push_str("</span>");
}

fn open_link(out: &mut String, href: &str, title: Option<&str>) {
    out.push_str(&format!(r#"<a href="{}"{LINK_ISOLATION}"#, encode_href(href)));
    if let Some(title) = title {
        out.push_str(&format!(r#" title="{}""#, encode_double_quoted_attribute(title)));
    }
    out.push('>');
}

/// Percent-encodes spaces, backslashes, control and non-ASCII bytes, then
/// escapes the result for a double-quoted attribute.
fn encode_href(href: &str) -> String {
    let mut encoded = String::with_capacity(href.len());
    for &byte in href.as_bytes() {
        match byte {
            b' ' => encoded.push_str("%20"),
            b'\\' => encoded.push_str("%5C"),
            0x00..=0x1F | 0x7F..=0xFF => encoded.push_str(&format!("%{byte:02X}")),
            _ => encoded.push(byte as char),
        }
    }
    encode_double_quoted_attribute(&encoded).into_owned()
}
