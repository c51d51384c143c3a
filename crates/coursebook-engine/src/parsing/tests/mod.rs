//! Fixture and property tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; their expected outlines are inline
//! `insta` snapshots so the expectation sits next to the test name.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, HeadingLevel},
    format_inline,
    inline::InlineSpan,
    parse_blocks, parse_document,
    snapshot::{invariants, outline},
};

fn parse_fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(&path).unwrap();
    let doc = parse_document(&md);
    invariants(&md, &doc.blocks);
    outline(&doc.blocks)
}

// Fixture-based snapshot tests

#[test]
fn fixture_headings_and_paragraphs() {
    insta::assert_snapshot!(parse_fixture("headings_and_paragraphs"), @r#"
    0..1 Heading(H2) Nguyên tắc vàng
    2..3 Paragraph Với SQL, bạn quen **chuẩn hóa** (normalize) - tách data ra nhiều bảng rồi JOIN.
        ~ Với SQL, bạn quen {b:chuẩn hóa} (normalize) - tách data ra nhiều bảng rồi JOIN.
    3..4 Paragraph Với MongoDB, tư duy khác: **"Data được đọc cùng nhau thì lưu cùng nhau"**
        ~ Với MongoDB, tư duy khác: {b:"Data được đọc cùng nhau thì lưu cùng nhau"}
    5..6 Heading(H3) Ghi chú
    "#);
}

#[test]
fn fixture_code_and_tables() {
    insta::assert_snapshot!(parse_fixture("code_and_tables"), @r#"
    0..1 Heading(H2) Các loại Index
    2..6 Table [Type | Use case | Ví dụ] 2 rows
        | Single Field | Query 1 field | `{ publicKey: 1 }` |
        | Compound | Query nhiều fields | `{ userId: 1, createdAt: -1 }` |
        ~ {c:{ publicKey: 1 }}
        ~ {c:{ userId: 1, createdAt: -1 }}
    7..11 CodeBlock(javascript) 2 lines
    12..13 Paragraph | stray pipe in prose
    "#);
}

#[test]
fn fixture_lists_and_warnings() {
    insta::assert_snapshot!(parse_fixture("lists_and_warnings"), @r#"
    0..3 UnorderedList
        - **Document size limit = 16MB**
        - 1 transaction ~500 bytes → chỉ chứa được ~32K transactions
        - **Write amplification**: mỗi lần add tx phải rewrite CẢ document
        ~ {b:Document size limit = 16MB}
        ~ {b:Write amplification}: mỗi lần add tx phải rewrite CẢ document
    3..4 Paragraph Sau danh sách
    4..7 OrderedList
        1. Filter bằng `$match`
        2. Group theo key
        3. Sort
        ~ Filter bằng {c:$match}
    8..9 InfoBox(Warning) **Lưu ý**: $lookup expensive! Cân nhắc denormalize hoặc 2 queries riêng.
        ~ {b:Lưu ý}: $lookup expensive! Cân nhắc denormalize hoặc 2 queries riêng.
    9..10 Paragraph > "Program to an interface"
    "#);
}

#[test]
fn fixture_unterminated_fence() {
    insta::assert_snapshot!(parse_fixture("unterminated_fence"), @r#"
    0..1 Heading(H3) Setup
    1..5 CodeBlock(bash) 3 lines
    "#);
}

// Scenario tests

#[test]
fn table_scenario() {
    insta::assert_debug_snapshot!(parse_blocks("| A | B |\n| --- | --- |\n| 1 | 2 |"), @r#"
    [
        Table(
            Table {
                header_cells: [
                    "A",
                    "B",
                ],
                rows: [
                    [
                        "1",
                        "2",
                    ],
                ],
            },
        ),
    ]
    "#);
}

#[test]
fn list_then_paragraph_scenario() {
    assert_eq!(
        parse_blocks("- x\n- y\nz"),
        vec![
            Block::UnorderedList {
                items: vec!["x".into(), "y".into()]
            },
            Block::Paragraph { text: "z".into() },
        ]
    );
}

#[test]
fn heading_scenario() {
    assert_eq!(
        parse_blocks("## Title"),
        vec![Block::Heading {
            level: HeadingLevel::H2,
            text: "Title".into()
        }]
    );
}

#[test]
fn unterminated_fence_scenario() {
    assert_eq!(
        parse_blocks("```js\nconsole.log(1)\n"),
        vec![Block::CodeBlock {
            language: "js".into(),
            lines: vec!["console.log(1)".into()],
        }]
    );
}

#[test]
fn inline_scenario() {
    assert_eq!(
        format_inline("Use **bold** and `code`"),
        vec![
            InlineSpan::PlainText("Use ".into()),
            InlineSpan::Bold("bold".into()),
            InlineSpan::PlainText(" and ".into()),
            InlineSpan::CodeSpan("code".into()),
        ]
    );
}

#[test]
fn unterminated_code_span_scenario() {
    assert_eq!(
        format_inline("a `b"),
        vec![InlineSpan::PlainText("a `b".into())]
    );
}

// Invariant tests

#[test]
fn parsing_is_idempotent() {
    let md = "## A\n| x |\n|---|\n- a\n1. b\n```\nc\n";
    assert_eq!(parse_document(md), parse_document(md));
}

#[test]
fn adjacent_prose_lines_stay_separate_paragraphs() {
    let blocks = parse_blocks("first line\nsecond line");
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| matches!(b, Block::Paragraph { .. })));
}

#[test]
fn empty_document() {
    assert!(parse_blocks("").is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse_document("\n  \n\t\n");
    invariants("\n  \n\t\n", &doc.blocks);
    assert!(doc.blocks.is_empty());
}

#[test]
fn unknown_tokens_fall_back_to_paragraphs() {
    let md = "# H1 is not part of the dialect\n#### nor is H4\n+ plus bullet\n> plain quote\n---";
    let doc = parse_document(md);
    invariants(md, &doc.blocks);
    assert_eq!(doc.blocks.len(), 5);
    assert!(doc.blocks().all(|b| matches!(b, Block::Paragraph { .. })));
}
