// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and `code`.\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_dialect_content(size: usize) -> String {
    let base = "%red% colored %% and !~blue;wavy; underlined ~! text with example.com\n\n!!! info\nCallout with %#ACBDEF%hex%% color\n\n!>spoiler body\nover two lines\n\n- [x] done\n- [ ] todo\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_near_matches(size: usize) -> String {
    let base = "%red% no close !~ open ~ *a _b [c]( `d %% !> ";
    base.repeat(size)
}
