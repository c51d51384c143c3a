// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lesson_content(size: usize) -> String {
    let base = "## Section\n\nParagraph with **bold** and `code` inside.\n\n| Type | Use case |\n|------|----------|\n| Single | `{ a: 1 }` |\n| Compound | `{ a: 1, b: -1 }` |\n\n- Bullet point\n- Another **item**\n\n1. First step\n2. Second step\n\n```javascript\ndb.users.find({ a: 1 })\n```\n\n> \u{26A0}\u{FE0F} **Note**: indexes cost writes.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_runs(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 4 {
            0 => format!("plain run number {i} without any delimiters at all"),
            1 => format!("**E**quality → **S**ort → **R**ange ({i})"),
            2 => format!("use `{{ userId: {i}, createdAt: -1 }}` for **fast** lookups"),
            _ => format!("unterminated `tick and **stars in run {i}"),
        })
        .collect()
}
