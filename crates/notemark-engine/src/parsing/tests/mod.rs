//! Whole-document parsing tests.
//!
//! Documents are compared as indented outlines (see `normalize`) so failures
//! show the tree shape, and every parse is run through `invariants::check`.

mod invariants;
mod normalize;

use pretty_assertions::assert_eq;

use crate::extensions::registry;
use crate::parsing::{MAX_NESTING, parse_document};

fn assert_outline(src: &str, expected: &str) {
    let doc = parse_document(src, registry());
    invariants::check(&doc);
    assert_eq!(normalize::outline(&doc), expected);
}

#[test]
fn heading_and_paragraph() {
    assert_outline(
        "# Title\n\nSome *em* and `code`.\n",
        r#"Heading(1)
  Text "Title"
Paragraph
  Text "Some "
  Emphasis
    Text "em"
  Text " and "
  Code "code"
  Text "."
"#,
    );
}

#[test]
fn admonition_wraps_spoiler() {
    assert_outline(
        "!!! info\n!>hidden\ntext\n\n",
        r#"Admonition(info)
  Spoiler
    Paragraph
      Text "hidden"
      SoftBreak
      Text "text"
"#,
    );
}

#[test]
fn checkboxes_end_a_list() {
    assert_outline(
        "- a\n- b\n- [x] done\n- [ ] todo",
        r#"List(ordered=false, start=1, tight=true)
  Item
    Paragraph
      Text "a"
  Item
    Paragraph
      Text "b"
Checkbox(true) "done"
Checkbox(false) "todo"
"#,
    );
}

#[test]
fn reference_defined_after_use_inside_quote() {
    assert_outline(
        "> quote with [link][r]\n\n[r]: /target \"T\"",
        r#"BlockQuote
  Paragraph
    Text "quote with "
    Link "/target" Some("T")
      Text "link"
"#,
    );
}

#[test]
fn table_cells_are_inline_parsed() {
    assert_outline(
        "| a | **b** |\n| :-- | --: |\n| 1 | %red%2%% |",
        r#"Table[Left, Right]
  Header
    Cell
      Text "a"
    Cell
      Strong
        Text "b"
  Row
    Cell
      Text "1"
    Cell
      ColoredText "red" "2"
"#,
    );
}

#[test]
fn code_block_is_a_raw_zone() {
    assert_outline(
        "```md\n%red%x%%\n- [x] no\n```",
        r#"CodeBlock(Some("md")) "%red%x%%\n- [x] no\n"
"#,
    );
}

#[test]
fn crlf_input_parses_like_lf() {
    let lf = parse_document("a\nb\n\n!!! note\nbody\n", registry());
    let crlf = parse_document("a\r\nb\r\n\r\n!!! note\r\nbody\r\n", registry());
    assert_eq!(normalize::outline(&crlf), normalize::outline(&lf));
}

#[test]
fn empty_document() {
    assert!(parse_document("", registry()).is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n  \n", registry()).is_empty());
}

#[test]
fn deep_spoiler_chain_stays_total() {
    let src = format!("{} deep", "!>".repeat(MAX_NESTING * 3));
    let doc = parse_document(&src, registry());
    invariants::check(&doc);
    assert_eq!(doc.blocks.len(), 1);
}

#[test]
fn adversarial_inputs_keep_invariants() {
    let inputs = [
        "%%%%%%",
        "!~~~~!",
        "!~;;;; ~!",
        "**__**__*_*_",
        "[[[[[]]]]]((((",
        "`` ` `` `",
        "<a <b <!-- <",
        "- [x]\n- [ ]\n- [y] z",
        "!!!\n!!!\n!!!",
        "> > > > >\n>",
        "| a |\n| - |\n|",
        "\\",
        "&#;&#x;&amp",
    ];
    for src in inputs {
        let doc = parse_document(src, registry());
        invariants::check(&doc);
    }
}
