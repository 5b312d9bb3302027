//! Line-break post-pass over rendered HTML.
//!
//! Editors show a paragraph break as a visibly larger gap than a soft line
//! break. This pass makes the view match: adjacent paragraphs get an explicit
//! `<br>` between them, and any run of two or more newlines left in the HTML
//! becomes a double break.
//!
//! The pass is textual and idempotent: its output never contains a newline
//! run or a `</p>`/`<p>` pair separated only by whitespace.

use std::sync::OnceLock;

use regex::Regex;

pub const BREAK: &str = "<br>";

fn paragraph_gap() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(</p>)(\s*<p>)").expect("paragraph gap pattern is valid"))
}

fn newline_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{2,}").expect("newline run pattern is valid"))
}

pub fn normalize(html: &str) -> String {
    let joined = paragraph_gap().replace_all(html, format!("${{1}}{BREAK}${{2}}"));
    newline_run()
        .replace_all(&joined, format!("{BREAK}{BREAK}"))
        .into_owned()
}
