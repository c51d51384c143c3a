use crate::parsing::{
    blocks::{Block, BlockNode},
    lines::{is_blank, split_lines},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block line ranges are non-empty and within the source
/// - Ranges are ordered and do not overlap
/// - Every line outside a block is blank
/// - Each block's content matches the source lines it claims
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, blocks: &[BlockNode]) {
    let lines = split_lines(source);
    let n = lines.len();
    let mut prev_end = 0;

    for b in blocks {
        assert!(
            !b.lines.is_empty() && b.lines.end <= n,
            "block line range out of bounds: {} (line count: {})",
            b.lines,
            n
        );
        assert!(
            b.lines.start >= prev_end,
            "block range {} overlaps previous block ending at line {}",
            b.lines,
            prev_end
        );
        assert_blank_gap(&lines, prev_end, b.lines.start);
        check_content(&lines, b);
        prev_end = b.lines.end;
    }

    assert_blank_gap(&lines, prev_end, n);
}

fn assert_blank_gap(lines: &[&str], from: usize, to: usize) {
    for (idx, line) in lines.iter().enumerate().take(to).skip(from) {
        assert!(
            is_blank(line),
            "non-blank line {idx} not claimed by any block: {line:?}"
        );
    }
}

fn check_content(lines: &[&str], b: &BlockNode) {
    let claimed = &lines[b.lines.start..b.lines.end];
    match &b.block {
        Block::Heading { text, .. } => {
            assert_eq!(claimed.len(), 1, "heading spans one line: {}", b.lines);
            assert!(
                claimed[0].ends_with(text.as_str()),
                "heading text {text:?} not found in {:?}",
                claimed[0]
            );
        }
        Block::Paragraph { text } => {
            assert_eq!(claimed, [text.as_str()], "paragraph is its line verbatim");
        }
        Block::InfoBox { text, .. } => {
            assert_eq!(claimed.len(), 1, "info box spans one line: {}", b.lines);
            assert!(
                claimed[0].contains(text.as_str()),
                "info box text {text:?} not found in {:?}",
                claimed[0]
            );
        }
        Block::CodeBlock { lines: code, .. } => {
            let body_end = 1 + code.len();
            assert!(
                claimed.len() == body_end || claimed.len() == body_end + 1,
                "code block {} claims {} lines for {} content lines",
                b.lines,
                claimed.len(),
                code.len()
            );
            assert_eq!(
                &claimed[1..body_end],
                code.as_slice(),
                "code lines are copied verbatim"
            );
        }
        Block::UnorderedList { items } | Block::OrderedList { items } => {
            assert_eq!(
                claimed.len(),
                items.len(),
                "one source line per list item: {}",
                b.lines
            );
            for (line, item) in claimed.iter().zip(items) {
                assert!(
                    line.ends_with(item.as_str()),
                    "list item {item:?} not found in {line:?}"
                );
            }
        }
        Block::Table(table) => {
            assert_eq!(
                claimed.len(),
                2 + table.rows.len(),
                "table claims header, separator and rows: {}",
                b.lines
            );
            for cell in &table.header_cells {
                assert!(
                    claimed[0].contains(cell.as_str()),
                    "header cell {cell:?} not found in {:?}",
                    claimed[0]
                );
            }
        }
    }
}
