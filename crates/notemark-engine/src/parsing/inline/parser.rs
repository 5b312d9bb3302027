use std::collections::HashMap;
use std::ops::Range;

use crate::extensions::{InlineExtension, InlineToken, Registry, checked_len};
use crate::parsing::MAX_NESTING;
use crate::parsing::cursor::Cursor;
use crate::parsing::refs::{LinkRef, RefMap};

use super::kinds::{AngleLink, CodeSpan, Delimiter, Entity, Escape, HtmlTag, Link};
use super::types::Inline;

/// Parses inline content into a sequence of [`Inline`] nodes.
///
/// At every position the registry's inline extensions are tried first, in
/// registration order; then the baseline rules. Text between constructs is
/// merged into single [`Inline::Text`] nodes.
pub fn parse_inline(text: &str, registry: &Registry, refs: &RefMap) -> Vec<Inline> {
    InlineParser::new(text, registry, refs, 0, false).parse()
}

/// Cached result of an extension's probe.
#[derive(Debug, Clone, Copy)]
enum Probe {
    Unknown,
    /// Earliest candidate offset, absolute in the parsed text.
    At(usize),
    /// The extension cannot start anywhere in the rest of the text.
    Never,
}

fn is_special(b: u8) -> bool {
    matches!(
        b,
        b'\\' | b'&' | b'`' | b'<' | b'!' | b'[' | b'*' | b'_' | b'~' | b'\n'
    )
}

fn run_at(bytes: &[u8], i: usize, b: u8) -> usize {
    bytes[i..].iter().take_while(|&&x| x == b).count()
}

struct InlineParser<'a> {
    cur: Cursor<'a>,
    registry: &'a Registry,
    refs: &'a RefMap,
    depth: usize,
    /// Inside the text of a link: no nested links or link-like extensions.
    in_link: bool,
    extensions: Vec<&'a (dyn InlineExtension + 'static)>,
    probes: Vec<Probe>,
    out: Vec<Inline>,
    /// Literal text not yet pushed to `out`.
    text: String,
    /// Smallest offset from which a closer search failed, per delimiter
    /// byte and run length. Searching from further right cannot succeed.
    closer_misses: HashMap<(u8, usize), usize>,
    /// Same, for closing backtick runs.
    tick_misses: HashMap<usize, usize>,
    comment_miss: bool,
    brackets: Option<HashMap<usize, usize>>,
}

impl<'a> InlineParser<'a> {
    fn new(
        text: &'a str,
        registry: &'a Registry,
        refs: &'a RefMap,
        depth: usize,
        in_link: bool,
    ) -> Self {
        let extensions: Vec<_> = registry
            .inline_extensions()
            .filter(|ext| !in_link || ext.allowed_in_link())
            .collect();
        let probes = vec![Probe::Unknown; extensions.len()];
        Self {
            cur: Cursor::new(text),
            registry,
            refs,
            depth,
            in_link,
            extensions,
            probes,
            out: Vec::new(),
            text: String::new(),
            closer_misses: HashMap::new(),
            tick_misses: HashMap::new(),
            comment_miss: false,
            brackets: None,
        }
    }

    fn parse(mut self) -> Vec<Inline> {
        while !self.cur.eof() {
            if let Some(node) = self.try_extension() {
                self.push(node);
                continue;
            }
            let handled = match self.cur.peek() {
                Some(Escape::BACKSLASH) => self.try_escape(),
                Some(Entity::AMP) => self.try_entity(),
                Some(CodeSpan::TICK) => self.try_code_span(),
                Some(HtmlTag::OPEN) => self.try_angle(),
                Some(Link::IMAGE) => self.try_image(),
                Some(Link::OPEN) => self.try_link(),
                Some(ch @ (Delimiter::STAR | Delimiter::UNDERSCORE)) => self.try_emphasis(ch),
                Some(Delimiter::TILDE) => self.try_strikethrough(),
                Some(b'\n') => {
                    self.line_break();
                    true
                }
                _ => false,
            };
            if !handled {
                self.text_run();
            }
        }
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            self.out.push(Inline::Text(std::mem::take(&mut self.text)));
        }
    }

    fn push(&mut self, node: Inline) {
        self.flush();
        self.out.push(node);
    }

    /// Parses nested content one level deeper.
    fn sub(&self, text: &str, in_link: bool) -> Vec<Inline> {
        if self.depth >= MAX_NESTING {
            log::debug!("inline nesting limit reached, keeping {} bytes as text", text.len());
            return if text.is_empty() {
                vec![]
            } else {
                vec![Inline::Text(text.to_string())]
            };
        }
        InlineParser::new(text, self.registry, self.refs, self.depth + 1, in_link).parse()
    }

    /// Tries every extension whose cached candidate is the current position.
    fn try_extension(&mut self) -> Option<Inline> {
        let pos = self.cur.i;
        for idx in 0..self.extensions.len() {
            let ext = self.extensions[idx];
            let candidate = match self.probes[idx] {
                Probe::Never => continue,
                Probe::At(at) if at >= pos => at,
                Probe::At(_) | Probe::Unknown => match ext.probe(self.cur.rest()) {
                    Some(offset) => pos + offset,
                    None => {
                        self.probes[idx] = Probe::Never;
                        continue;
                    }
                },
            };
            self.probes[idx] = Probe::At(candidate);
            if candidate != pos {
                continue;
            }

            let rest = self.cur.rest();
            let Some((token, len)) = ext.tokenize(rest) else {
                continue;
            };
            let Some(len) = checked_len(ext.name(), rest, len) else {
                continue;
            };
            self.cur.bump_n(len);
            return Some(Self::lower(token));
        }
        None
    }

    fn lower(token: InlineToken) -> Inline {
        match token {
            InlineToken::ColoredText { color, text } => Inline::ColoredText { color, text },
            InlineToken::Underline { options, text } => Inline::Underline { options, text },
            InlineToken::Autolink { href, text } => Inline::Autolink { href, text },
        }
    }

    /// Nearest extension candidate after `pos`.
    fn next_candidate(&self, pos: usize) -> usize {
        self.probes
            .iter()
            .filter_map(|probe| match probe {
                Probe::At(at) if *at > pos => Some(*at),
                _ => None,
            })
            .min()
            .unwrap_or(usize::MAX)
    }

    /// Literal text up to the next special byte or extension candidate.
    /// Always consumes at least one char.
    fn text_run(&mut self) {
        let start = self.cur.i;
        let stop = self.next_candidate(start);
        self.cur.bump_char();
        while let Some(b) = self.cur.peek() {
            if self.cur.i >= stop || is_special(b) {
                break;
            }
            self.cur.bump_char();
        }
        self.text.push_str(self.cur.since(start));
    }

    fn skip_line_indent(&mut self) {
        self.cur.eat_while(|b| b == b' ' || b == b'\t');
    }

    fn line_break(&mut self) {
        let kept = self.text.trim_end_matches(' ').len();
        let hard = self.text.len() - kept >= 2;
        self.text.truncate(kept);
        self.push(if hard {
            Inline::HardBreak
        } else {
            Inline::SoftBreak
        });
        self.cur.bump();
        self.skip_line_indent();
    }

    fn try_escape(&mut self) -> bool {
        match self.cur.peek_at(1) {
            Some(b'\n') => {
                self.cur.bump_n(2);
                self.push(Inline::HardBreak);
                self.skip_line_indent();
                true
            }
            Some(b) if Escape::is_escapable(b) => {
                self.text.push(b as char);
                self.cur.bump_n(2);
                true
            }
            _ => false,
        }
    }

    fn try_entity(&mut self) -> bool {
        let rest = self.cur.rest();
        let Some(len) = Entity::len(rest) else {
            return false;
        };
        self.push(Inline::Html(rest[..len].to_string()));
        self.cur.bump_n(len);
        true
    }

    /// Start of the closing run for a code span opened by `len` backticks.
    fn code_close(&mut self, from: usize, len: usize) -> Option<usize> {
        if self.tick_misses.get(&len).is_some_and(|&miss| from >= miss) {
            return None;
        }
        let found = CodeSpan::find_close(self.cur.s, from, len);
        if found.is_none() {
            self.tick_misses.insert(len, from);
        }
        found
    }

    fn try_code_span(&mut self) -> bool {
        let s = self.cur.s;
        let start = self.cur.i;
        let len = self.cur.run_len(CodeSpan::TICK);
        let open_end = start + len;
        match self.code_close(open_end, len) {
            Some(close) => {
                self.push(Inline::Code(CodeSpan::content(&s[open_end..close])));
                self.cur.i = close + len;
            }
            None => {
                self.text.push_str(&s[start..open_end]);
                self.cur.i = open_end;
            }
        }
        true
    }

    fn try_angle(&mut self) -> bool {
        let rest = self.cur.rest();
        if !self.in_link {
            if let Some((href, text, len)) = AngleLink::parse(rest) {
                self.push(Inline::Link {
                    href,
                    title: None,
                    children: vec![Inline::Text(text)],
                });
                self.cur.bump_n(len);
                return true;
            }
        }

        let len = if rest.starts_with(HtmlTag::COMMENT_OPEN) {
            if self.comment_miss {
                None
            } else {
                let len = HtmlTag::comment_len(rest);
                self.comment_miss = len.is_none();
                len
            }
        } else {
            HtmlTag::open_len(rest).or_else(|| HtmlTag::close_len(rest))
        };
        let Some(len) = len else {
            return false;
        };
        self.push(Inline::Html(rest[..len].to_string()));
        self.cur.bump_n(len);
        true
    }

    /// Pairs every `[` with its `]`, skipping escapes and code spans.
    fn pair_brackets(&mut self) -> HashMap<usize, usize> {
        let bytes = self.cur.s.as_bytes();
        let mut pairs = HashMap::new();
        let mut open = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                Escape::BACKSLASH => i += 2,
                CodeSpan::TICK => {
                    let len = run_at(bytes, i, CodeSpan::TICK);
                    i = match self.code_close(i + len, len) {
                        Some(close) => close + len,
                        None => i + len,
                    };
                }
                Link::OPEN => {
                    open.push(i);
                    i += 1;
                }
                Link::CLOSE => {
                    if let Some(start) = open.pop() {
                        pairs.insert(start, i);
                    }
                    i += 1;
                }
                _ => i += 1,
            }
        }
        pairs
    }

    fn matching_bracket(&mut self, open: usize) -> Option<usize> {
        if self.brackets.is_none() {
            self.brackets = Some(self.pair_brackets());
        }
        self.brackets.as_ref()?.get(&open).copied()
    }

    /// Resolves `[text]` at `open` plus what follows it into a link target.
    /// Returns the text range, the target and the end offset.
    fn link_parts(&mut self, open: usize) -> Option<(Range<usize>, LinkRef, usize)> {
        let s = self.cur.s;
        let close = self.matching_bracket(open)?;
        let text = open + 1..close;
        let after = &s[close + 1..];

        if after.starts_with(Link::DEST_OPEN as char) {
            if let Some((href, title, len)) = Link::inline_target(after) {
                return Some((text, LinkRef { href, title }, close + 1 + len));
            }
        }
        if after.starts_with(Link::OPEN as char) {
            if let Some((label, len)) = Link::label(after) {
                let key = if label.trim().is_empty() {
                    &s[text.clone()]
                } else {
                    label
                };
                let target = self.refs.get(key)?.clone();
                return Some((text, target, close + 1 + len));
            }
        }
        let target = self.refs.get(&s[text.clone()])?.clone();
        Some((text, target, close + 1))
    }

    fn try_link(&mut self) -> bool {
        if self.in_link {
            return false;
        }
        let Some((text, target, end)) = self.link_parts(self.cur.i) else {
            return false;
        };
        let children = self.sub(&self.cur.s[text], true);
        self.push(Inline::Link {
            href: target.href,
            title: target.title,
            children,
        });
        self.cur.i = end;
        true
    }

    fn try_image(&mut self) -> bool {
        if self.cur.peek_at(1) != Some(Link::OPEN) {
            return false;
        }
        let Some((text, target, end)) = self.link_parts(self.cur.i + 1) else {
            return false;
        };
        let alt = Inline::plain_text(&self.sub(&self.cur.s[text], true));
        self.push(Inline::Image {
            src: target.href,
            alt,
            title: target.title,
        });
        self.cur.i = end;
        true
    }

    /// Start of the closing run of exactly `want` delimiters after `from`.
    fn find_closer(&mut self, ch: u8, want: usize, from: usize) -> Option<usize> {
        if self
            .closer_misses
            .get(&(ch, want))
            .is_some_and(|&miss| from >= miss)
        {
            return None;
        }
        let s = self.cur.s;
        let bytes = s.as_bytes();
        let mut i = from;
        while i < bytes.len() {
            match bytes[i] {
                Escape::BACKSLASH => i += 2,
                CodeSpan::TICK => {
                    let len = run_at(bytes, i, CodeSpan::TICK);
                    i = match self.code_close(i + len, len) {
                        Some(close) => close + len,
                        None => i + len,
                    };
                }
                b if b == ch => {
                    let run_start = i;
                    i += run_at(bytes, i, ch);
                    if i - run_start == want && run_start > from {
                        let (prev, next) = Delimiter::neighbors(s, run_start, i);
                        if Delimiter::can_close(ch, prev, next) {
                            return Some(run_start);
                        }
                    }
                }
                _ => i += 1,
            }
        }
        self.closer_misses.insert((ch, want), from);
        None
    }

    /// `*`/`_` runs. Tries `***`, `**` then `*` against an exact-length
    /// closer; extra opening delimiters stay literal. A run that opens
    /// nothing is literal as a whole.
    fn try_emphasis(&mut self, ch: u8) -> bool {
        let s = self.cur.s;
        let start = self.cur.i;
        let run = self.cur.run_len(ch);
        let end = start + run;
        let (prev, next) = Delimiter::neighbors(s, start, end);

        if Delimiter::can_open(ch, prev, next) {
            for want in (1..=Delimiter::MAX_EMPHASIS.min(run)).rev() {
                let Some(close) = self.find_closer(ch, want, end) else {
                    continue;
                };
                self.text.push_str(&s[start..end - want]);
                let children = self.sub(&s[end..close], self.in_link);
                self.push(match want {
                    1 => Inline::Emphasis(children),
                    2 => Inline::Strong(children),
                    _ => Inline::Emphasis(vec![Inline::Strong(children)]),
                });
                self.cur.i = close + want;
                return true;
            }
        }
        self.text.push_str(&s[start..end]);
        self.cur.i = end;
        true
    }

    fn try_strikethrough(&mut self) -> bool {
        let s = self.cur.s;
        let start = self.cur.i;
        let run = self.cur.run_len(Delimiter::TILDE);
        let end = start + run;
        let (prev, next) = Delimiter::neighbors(s, start, end);

        if run == Delimiter::STRIKE_LEN && Delimiter::can_open(Delimiter::TILDE, prev, next) {
            if let Some(close) = self.find_closer(Delimiter::TILDE, run, end) {
                let children = self.sub(&s[end..close], self.in_link);
                self.push(Inline::Strikethrough(children));
                self.cur.i = close + run;
                return true;
            }
        }
        self.text.push_str(&s[start..end]);
        self.cur.i = end;
        true
    }
}
