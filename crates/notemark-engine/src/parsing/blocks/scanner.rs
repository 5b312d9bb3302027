//! The block scan loop.
//!
//! Baseline rules, in priority order after block extensions:
//! blank lines, indented code, fenced code, ATX heading, thematic break,
//! blockquote, list, HTML block, link reference definition, table,
//! paragraph.

use crate::extensions::{BlockToken, Registry, checked_len};
use crate::parsing::MAX_NESTING;
use crate::parsing::refs::RefMap;

use super::kinds::{
    AtxHeading, BlockQuote, CodeFence, HtmlBlock, LinkRefDef, ListMarker, Paragraph, TableRow,
    ThematicBreak,
};
use super::lines::{first_line, indent, is_blank, second_line, strip_indent};
use super::types::{Block, List, RawBlock, Table};

/// Indentation that turns a line into indented code.
const CODE_INDENT: usize = 4;

/// Scans text into raw blocks, recursing into containers with the same
/// registry and reference map.
pub struct BlockScanner<'a> {
    registry: &'a Registry,
    refs: &'a mut RefMap,
}

impl<'a> BlockScanner<'a> {
    pub fn new(registry: &'a Registry, refs: &'a mut RefMap) -> Self {
        Self { registry, refs }
    }

    /// Scans `text` as a sequence of blocks at nesting level `depth`.
    pub fn scan(&mut self, text: &str, depth: usize) -> Vec<RawBlock> {
        if depth > MAX_NESTING {
            log::debug!("block nesting limit reached, keeping {} bytes as text", text.len());
            let text = text.trim();
            return if text.is_empty() {
                vec![]
            } else {
                vec![Block::Paragraph(text.to_string())]
            };
        }

        let mut blocks = Vec::new();
        let mut p = 0;
        while p < text.len() {
            let rest = &text[p..];
            let (line, next) = first_line(rest);
            if is_blank(line) {
                p += next;
                continue;
            }
            let consumed = match self.extension(rest, depth) {
                Some((block, len)) => {
                    blocks.push(block);
                    len
                }
                None => self.baseline(rest, depth, &mut blocks),
            };
            debug_assert!(consumed > 0, "block rule consumed nothing");
            p += consumed;
        }
        blocks
    }

    /// Offers `rest` to every block extension in registration order.
    fn extension(&mut self, rest: &str, depth: usize) -> Option<(RawBlock, usize)> {
        let registry = self.registry;
        for ext in registry.block_extensions() {
            let Some((token, len)) = ext.tokenize(rest) else {
                continue;
            };
            let Some(len) = checked_len(ext.name(), rest, len) else {
                continue;
            };
            log::trace!("block extension `{}` matched {len} bytes", ext.name());
            return Some((self.lower(token, depth), len));
        }
        None
    }

    /// Turns an extension token into a block, scanning nested bodies.
    fn lower(&mut self, token: BlockToken, depth: usize) -> RawBlock {
        match token {
            BlockToken::Spoiler { body } => Block::Spoiler(self.scan(&body, depth + 1)),
            BlockToken::Admonition { kind, body } => Block::Admonition {
                kind,
                blocks: self.scan(&body, depth + 1),
            },
            BlockToken::Checkbox { checked, text } => Block::Checkbox {
                checked,
                text: text.trim().to_string(),
            },
        }
    }

    /// Whether any block extension claims this line as its first line.
    fn starts_extension(&self, line: &str) -> bool {
        self.registry
            .block_extensions()
            .any(|ext| ext.probe(line) == Some(0))
    }

    /// Whether `line` opens a block that may interrupt a paragraph.
    fn starts_block(&self, line: &str) -> bool {
        if is_blank(line) || indent(line) >= CODE_INDENT {
            return false;
        }
        self.starts_extension(line)
            || CodeFence::open(line).is_some()
            || AtxHeading::parse(line).is_some()
            || ThematicBreak::matches(line)
            || BlockQuote::starts(line)
            || ListMarker::parse(line).is_some_and(|m| m.can_interrupt_paragraph())
            || HtmlBlock::start(line).is_some_and(HtmlBlock::can_interrupt_paragraph)
    }

    /// Runs the baseline rules; always consumes at least the first line.
    fn baseline(&mut self, rest: &str, depth: usize, out: &mut Vec<RawBlock>) -> usize {
        let (line, next) = first_line(rest);

        if indent(line) >= CODE_INDENT {
            let (block, len) = indented_code(rest);
            out.push(block);
            return len;
        }
        if let Some(fence) = CodeFence::open(line) {
            let (block, len) = fenced_code(&fence, rest);
            out.push(block);
            return len;
        }
        if let Some((level, content)) = AtxHeading::parse(line) {
            out.push(Block::Heading {
                level,
                content: content.to_string(),
            });
            return next;
        }
        if ThematicBreak::matches(line) {
            out.push(Block::ThematicBreak);
            return next;
        }
        if BlockQuote::starts(line) {
            let (body, len) = self.quote_body(rest);
            out.push(Block::BlockQuote(self.scan(&body, depth + 1)));
            return len;
        }
        if let Some(marker) = ListMarker::parse(line) {
            let (list, len) = self.list(rest, marker, depth);
            out.push(Block::List(list));
            return len;
        }
        if let Some(kind) = HtmlBlock::start(line) {
            let len = kind.scan_len(rest);
            let mut html = rest[..len].trim_end_matches('\n').to_string();
            html.push('\n');
            out.push(Block::Html(html));
            return len;
        }
        if let Some(def) = LinkRefDef::parse(line) {
            if !self.refs.insert(&def.label, def.target) {
                log::trace!("duplicate link reference `{}` ignored", def.label);
            }
            return next;
        }
        if let Some((table, len)) = self.table(rest) {
            out.push(Block::Table(table));
            return len;
        }
        let (block, len) = self.paragraph(rest);
        out.push(block);
        len
    }

    fn quote_body(&self, rest: &str) -> (String, usize) {
        let mut body: Vec<&str> = Vec::new();
        let mut lazy_ok = false;
        let mut p = 0;
        while p < rest.len() {
            let (line, next) = first_line(&rest[p..]);
            if let Some(content) = BlockQuote::strip_prefix(line) {
                lazy_ok = !is_blank(content);
                body.push(content);
            } else if lazy_ok && !is_blank(line) && !self.starts_block(line) {
                body.push(line);
            } else {
                break;
            }
            p += next;
        }
        (body.join("\n"), p)
    }

    fn list(&mut self, rest: &str, first: ListMarker, depth: usize) -> (List<String>, usize) {
        let mut items: Vec<String> = Vec::new();
        let mut loose = false;
        let mut marker = first;
        let mut p = 0;

        loop {
            let (line, next) = first_line(&rest[p..]);
            let mut item: Vec<&str> = vec![&line[marker.content_offset.min(line.len())..]];
            p += next;

            let mut blanks = 0;
            let mut next_marker = None;
            while p < rest.len() {
                let (line, next) = first_line(&rest[p..]);
                if is_blank(line) {
                    blanks += 1;
                    p += next;
                    continue;
                }
                if indent(line) >= marker.content_indent {
                    if blanks > 0 {
                        loose |= item.iter().any(|l| !is_blank(l));
                        item.extend(std::iter::repeat_n("", blanks));
                        blanks = 0;
                    }
                    item.push(strip_indent(line, marker.content_indent));
                    p += next;
                    continue;
                }
                if self.starts_extension(line) {
                    break;
                }
                if let Some(m) = ListMarker::parse(line).filter(|m| marker.same_list(m)) {
                    next_marker = Some(m);
                    break;
                }
                if blanks == 0 && !self.starts_block(line) {
                    item.push(line.trim_start());
                    p += next;
                    continue;
                }
                break;
            }

            items.push(item.join("\n"));
            match next_marker {
                Some(m) => {
                    loose |= blanks > 0;
                    marker = m;
                }
                None => break,
            }
        }

        let list = List {
            ordered: first.ordered,
            start: first.start,
            tight: !loose,
            items: items
                .iter()
                .map(|item| self.scan(item, depth + 1))
                .collect(),
        };
        (list, p)
    }

    fn table(&self, rest: &str) -> Option<(Table<String>, usize)> {
        let (line, next) = first_line(rest);
        let (header, alignments) = TableRow::header(line, second_line(rest)?)?;
        let mut p = next + first_line(&rest[next..]).1;

        let mut rows = Vec::new();
        while p < rest.len() {
            let (line, next) = first_line(&rest[p..]);
            if is_blank(line) || !TableRow::has_pipe(line) || self.starts_block(line) {
                break;
            }
            let mut cells = TableRow::cells(line);
            cells.resize(header.len(), String::new());
            rows.push(cells);
            p += next;
        }
        Some((
            Table {
                alignments,
                header,
                rows,
            },
            p,
        ))
    }

    fn paragraph(&self, rest: &str) -> (RawBlock, usize) {
        let mut lines: Vec<&str> = Vec::new();
        let mut p = 0;
        while p < rest.len() {
            let (line, next) = first_line(&rest[p..]);
            if is_blank(line) {
                break;
            }
            if !lines.is_empty() {
                if let Some(level) = Paragraph::setext_level(line) {
                    let content = lines.join("\n").trim_end().to_string();
                    return (Block::Heading { level, content }, p + next);
                }
                if self.starts_block(line) {
                    break;
                }
                let following = second_line(&rest[p..]).unwrap_or("");
                if TableRow::header(line, following).is_some() {
                    break;
                }
            }
            lines.push(line.trim_start());
            p += next;
        }
        let text = lines.join("\n").trim_end().to_string();
        (Block::Paragraph(text), p)
    }
}

fn indented_code(rest: &str) -> (RawBlock, usize) {
    let mut lines: Vec<&str> = Vec::new();
    let mut p = 0;
    while p < rest.len() {
        let (line, next) = first_line(&rest[p..]);
        if !is_blank(line) && indent(line) < CODE_INDENT {
            break;
        }
        lines.push(strip_indent(line, CODE_INDENT));
        p += next;
    }
    while lines.last().is_some_and(|l| is_blank(l)) {
        lines.pop();
    }
    let code = lines.iter().map(|l| format!("{l}\n")).collect();
    (Block::CodeBlock { lang: None, code }, p)
}

fn fenced_code(fence: &CodeFence, rest: &str) -> (RawBlock, usize) {
    let (_, mut p) = first_line(rest);
    let mut code = String::new();
    while p < rest.len() {
        let (line, next) = first_line(&rest[p..]);
        p += next;
        if fence.closes(line) {
            break;
        }
        code.push_str(fence.content(line));
        code.push('\n');
    }
    (
        Block::CodeBlock {
            lang: fence.lang(),
            code,
        },
        p,
    )
}
