//! Pipe table sub-parser.
//!
//! A table is a header line, a separator line and any number of data rows:
//!
//! ```text
//! | Stage  | SQL      |
//! |--------|----------|
//! | $match | WHERE    |
//! ```
//!
//! The separator is only used as the lookahead trigger; its content is never
//! inspected beyond containing [`PipeTable::SEPARATOR`].

use crate::parsing::blocks::types::Table;

/// Pipe table syntax with owned delimiter constants.
pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';
    pub const SEPARATOR: &'static str = "---";

    /// True if `line` could be a table row.
    pub fn is_row(line: &str) -> bool {
        line.starts_with(Self::PIPE)
    }

    /// True if `line` is the header of a table, given the following line.
    ///
    /// A lone `|` in prose is not enough: the next line must look like a
    /// separator.
    pub fn opens(line: &str, next: Option<&str>) -> bool {
        Self::is_row(line) && next.is_some_and(|n| n.contains(Self::SEPARATOR))
    }

    /// Splits a row into trimmed cells.
    ///
    /// Only the empty cells produced by a leading or trailing pipe are
    /// dropped; an empty cell between two pipes is kept as `""` so columns
    /// stay aligned.
    pub fn split_cells(line: &str) -> Vec<String> {
        let mut cells: Vec<&str> = line.split(Self::PIPE).collect();
        if cells.first().is_some_and(|c| c.trim().is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.trim().is_empty()) {
            cells.pop();
        }
        cells.into_iter().map(|c| c.trim().to_string()).collect()
    }
}

/// Result of [`parse_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableParse {
    pub table: Table,
    /// Lines consumed: header, separator and every data row.
    pub consumed: usize,
}

/// Parses the table whose header sits at `lines[start]`.
///
/// The separator at `start + 1` is skipped unconditionally. Data rows are
/// taken from `start + 2` while lines start with a pipe. Callers are expected
/// to have checked [`PipeTable::opens`] first; a `start` past the end yields
/// an empty table that consumes nothing.
pub fn parse_table(lines: &[&str], start: usize) -> TableParse {
    let Some(header) = lines.get(start) else {
        return TableParse {
            table: Table::default(),
            consumed: 0,
        };
    };

    let header_cells = PipeTable::split_cells(header);
    let separator_end = (start + 2).min(lines.len());

    let rows: Vec<Vec<String>> = lines[separator_end..]
        .iter()
        .take_while(|line| PipeTable::is_row(line))
        .map(|line| PipeTable::split_cells(line))
        .collect();

    TableParse {
        consumed: separator_end - start + rows.len(),
        table: Table { header_cells, rows },
    }
}
