//! Converts parsed lessons into styled ratatui lines.
//!
//! The same lines back both the interactive content pane and `dump --format
//! text`, which flattens them with [`plain_text`].

use coursebook_engine::{
    Block, HeadingLevel, InfoKind, InlineSpan, Lesson, ParsedDoc, Table, format_inline,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Accent used when a course color fails to parse.
pub const DEFAULT_ACCENT: Color = Color::Green;

const BULLET: &str = "  • ";
const QUOTE_BAR: &str = "┃ ";
const CODE_INDENT: &str = "  ";
const CELL_SEPARATOR: &str = " │ ";

/// Parse a `#rrggbb` course color.
pub fn accent_color(color: &str) -> Color {
    color.parse().unwrap_or(DEFAULT_ACCENT)
}

/// Title, description and every block of a lesson.
pub fn lesson_lines(lesson: &Lesson, doc: &ParsedDoc, accent: Color) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            lesson.title.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            lesson.desc.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::default(),
    ];
    lines.extend(document_lines(doc, accent));
    lines
}

pub fn document_lines(doc: &ParsedDoc, accent: Color) -> Vec<Line<'static>> {
    let mut lines = vec![];
    for (i, block) in doc.blocks().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        block_lines(block, accent, &mut lines);
    }
    lines
}

fn block_lines(block: &Block, accent: Color, out: &mut Vec<Line<'static>>) {
    match block {
        Block::Heading { level, text } => {
            let style = match level {
                HeadingLevel::H2 => Style::default()
                    .fg(accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                HeadingLevel::H3 => Style::default().add_modifier(Modifier::BOLD),
            };
            out.push(Line::from(inline_spans(&format_inline(text), style)));
        }
        Block::Paragraph { text } => {
            out.push(Line::from(inline_spans(&format_inline(text), Style::default())));
        }
        Block::UnorderedList { items } => {
            for item in items {
                out.push(prefixed(BULLET.to_string(), item));
            }
        }
        Block::OrderedList { items } => {
            for (n, item) in items.iter().enumerate() {
                out.push(prefixed(format!("  {}. ", n + 1), item));
            }
        }
        Block::InfoBox { kind, text } => {
            let style = info_style(*kind, accent);
            out.push(Line::from(vec![
                Span::styled(QUOTE_BAR, style),
                Span::styled(info_title(*kind), style.add_modifier(Modifier::BOLD)),
            ]));
            let mut spans = vec![Span::styled(QUOTE_BAR, style)];
            spans.extend(inline_spans(&format_inline(text), Style::default()));
            out.push(Line::from(spans));
        }
        Block::CodeBlock { language, lines } => {
            let frame = Style::default().add_modifier(Modifier::DIM);
            out.push(Line::from(Span::styled(format!("─── {language} ───"), frame)));
            for line in lines {
                out.push(Line::from(Span::styled(
                    format!("{CODE_INDENT}{line}"),
                    Style::default().fg(Color::Cyan),
                )));
            }
            out.push(Line::from(Span::styled("───", frame)));
        }
        Block::Table(table) => table_lines(table, out),
    }
}

fn prefixed(prefix: String, text: &str) -> Line<'static> {
    let mut spans = vec![Span::raw(prefix)];
    spans.extend(inline_spans(&format_inline(text), Style::default()));
    Line::from(spans)
}

fn info_title(kind: InfoKind) -> &'static str {
    match kind {
        InfoKind::Warning => "⚠ Warning",
        _ => "ℹ Note",
    }
}

/// Warnings are yellow; kinds this viewer doesn't know take the course accent.
fn info_style(kind: InfoKind, accent: Color) -> Style {
    match kind {
        InfoKind::Warning => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(accent),
    }
}

/// Styled spans for one formatted run. Bold adds to `base`; code spans get
/// their own color on top of it.
pub fn inline_spans(spans: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| {
            let style = match span {
                InlineSpan::PlainText(_) => base,
                InlineSpan::Bold(_) => base.add_modifier(Modifier::BOLD),
                InlineSpan::CodeSpan(_) => base.fg(Color::LightRed),
            };
            Span::styled(span.text().to_string(), style)
        })
        .collect()
}

/// Columns padded to the widest cell. Rows shorter than the header are
/// padded with empty cells; extra cells are kept.
fn table_lines(table: &Table, out: &mut Vec<Line<'static>>) {
    let header: Vec<Vec<Span<'static>>> = table
        .header_cells
        .iter()
        .map(|cell| inline_spans(&format_inline(cell), Style::default().add_modifier(Modifier::BOLD)))
        .collect();
    let rows: Vec<Vec<Vec<Span<'static>>>> = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| inline_spans(&format_inline(cell), Style::default()))
                .collect()
        })
        .collect();

    let columns = rows.iter().map(Vec::len).chain([header.len()]).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in std::iter::once(&header).chain(&rows) {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell_width(cell));
        }
    }

    out.push(table_row(header, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push(Line::from(Span::styled(
        rule.join("─┼─"),
        Style::default().add_modifier(Modifier::DIM),
    )));
    for row in rows {
        out.push(table_row(row, &widths));
    }
}

fn table_row(cells: Vec<Vec<Span<'static>>>, widths: &[usize]) -> Line<'static> {
    let mut spans = vec![];
    let mut cells = cells.into_iter();
    for (col, width) in widths.iter().enumerate() {
        if col > 0 {
            spans.push(Span::styled(
                CELL_SEPARATOR,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        let cell = cells.next().unwrap_or_default();
        let pad = width - cell_width(&cell);
        spans.extend(cell);
        // The last column is left ragged.
        if col + 1 < widths.len() && pad > 0 {
            spans.push(Span::raw(" ".repeat(pad)));
        }
    }
    Line::from(spans)
}

fn cell_width(cell: &[Span]) -> usize {
    cell.iter().map(Span::width).sum()
}

/// Lines flattened to unstyled text, one per line, trailing spaces removed.
pub fn plain_text(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}
