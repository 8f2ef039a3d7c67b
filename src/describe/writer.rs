//! Indentation-aware attribute writer
//!
//! Rows are buffered as cells and only reach the output on [`PrefixWriter::flush`],
//! where each run of rows sharing a column is padded to the widest cell in it.
//! Subsections borrow the writer mutably, so a [`Section`] can never outlive
//! the writer (or the section) it was opened from.

use std::io::Write;

/// Spaces added after the widest cell of a column block
const COLUMN_PADDING: usize = 1;

/// Default spaces per nesting level
pub const DEFAULT_INDENT: usize = 2;

/// One buffered output row; a row without cells is a blank line
#[derive(Debug, Clone, PartialEq)]
struct Row {
    depth: usize,
    cells: Vec<String>,
}

/// Operations shared by the root writer and every subsection
pub trait AttributeWriter {
    /// Append a `label: value` row at the current depth
    fn write_attribute(&mut self, label: &str, value: &str);

    /// Append a row of column-aligned cells at the current depth
    fn write_cols(&mut self, cols: &[&str]);

    /// Append a blank separator row
    fn write_line(&mut self);

    /// Append a `label:` header and return a writer one level deeper
    fn section(&mut self, label: &str) -> Section<'_>;
}

/// Root writer bound to an output sink
pub struct PrefixWriter<W: Write> {
    out: W,
    rows: Vec<Row>,
    indent: usize,
}

impl<W: Write> PrefixWriter<W> {
    pub fn new(out: W) -> Self {
        Self::with_indent(out, DEFAULT_INDENT)
    }

    pub fn with_indent(out: W, indent: usize) -> Self {
        Self {
            out,
            rows: Vec::new(),
            indent,
        }
    }

    /// Write every buffered row to the sink in call order
    ///
    /// The buffer is emptied even when the sink fails.
    pub fn flush(&mut self) -> std::io::Result<()> {
        let rows = std::mem::take(&mut self.rows);
        if rows.is_empty() {
            return Ok(());
        }
        let text = render_rows(&rows, self.indent);
        tracing::trace!(rows = rows.len(), bytes = text.len(), "flushing attribute rows");
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> AttributeWriter for PrefixWriter<W> {
    fn write_attribute(&mut self, label: &str, value: &str) {
        push_attribute(&mut self.rows, 0, label, value);
    }

    fn write_cols(&mut self, cols: &[&str]) {
        push_cols(&mut self.rows, 0, cols);
    }

    fn write_line(&mut self) {
        push_blank(&mut self.rows, 0);
    }

    fn section(&mut self, label: &str) -> Section<'_> {
        open_section(&mut self.rows, 0, label)
    }
}

/// Nested writer context, one level deeper than its parent
pub struct Section<'a> {
    rows: &'a mut Vec<Row>,
    depth: usize,
}

impl Section<'_> {
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl AttributeWriter for Section<'_> {
    fn write_attribute(&mut self, label: &str, value: &str) {
        push_attribute(self.rows, self.depth, label, value);
    }

    fn write_cols(&mut self, cols: &[&str]) {
        push_cols(self.rows, self.depth, cols);
    }

    fn write_line(&mut self) {
        push_blank(self.rows, self.depth);
    }

    fn section(&mut self, label: &str) -> Section<'_> {
        open_section(self.rows, self.depth, label)
    }
}

fn push_attribute(rows: &mut Vec<Row>, depth: usize, label: &str, value: &str) {
    rows.push(Row {
        depth,
        cells: vec![format!("{}:", label), value.to_string()],
    });
}

fn push_cols(rows: &mut Vec<Row>, depth: usize, cols: &[&str]) {
    rows.push(Row {
        depth,
        cells: cols.iter().map(|c| c.to_string()).collect(),
    });
}

fn push_blank(rows: &mut Vec<Row>, depth: usize) {
    rows.push(Row {
        depth,
        cells: Vec::new(),
    });
}

fn open_section<'a>(rows: &'a mut Vec<Row>, depth: usize, label: &str) -> Section<'a> {
    // A lone header cell keeps the header out of its children's column block.
    rows.push(Row {
        depth,
        cells: vec![format!("{}:", label)],
    });
    Section {
        rows,
        depth: depth + 1,
    }
}

/// Lay out rows with indentation and tab-writer style column alignment
fn render_rows(rows: &[Row], indent: usize) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells = row.cells.clone();
            if let Some(first) = cells.first_mut() {
                first.insert_str(0, &" ".repeat(row.depth * indent));
            }
            cells
        })
        .collect();

    let mut widths = vec![Vec::new(); cells.len()];
    align_column(&cells, &mut widths, 0, 0, cells.len());

    let mut text = String::new();
    for (row, row_widths) in cells.iter().zip(&widths) {
        // Cells after the last non-empty one would only contribute padding.
        let last = row.iter().rposition(|cell| !cell.is_empty()).unwrap_or(0);
        for (col, cell) in row.iter().enumerate().take(last + 1) {
            text.push_str(cell);
            if col == last {
                break;
            }
            let width = row_widths.get(col).copied().unwrap_or(0);
            text.push_str(&" ".repeat(width.saturating_sub(cell.chars().count())));
        }
        text.push('\n');
    }
    text
}

/// A cell is terminated when another cell follows it on the same row
fn is_terminated(row: &[String], col: usize) -> bool {
    row.len() > col + 1
}

/// Assign widths for `col` over `start..end`, one block of consecutive
/// terminated cells at a time, then recurse into the next column per block.
fn align_column(
    cells: &[Vec<String>],
    widths: &mut [Vec<usize>],
    col: usize,
    start: usize,
    end: usize,
) {
    let mut i = start;
    while i < end {
        if !is_terminated(&cells[i], col) {
            i += 1;
            continue;
        }
        let block_start = i;
        while i < end && is_terminated(&cells[i], col) {
            i += 1;
        }
        let width = cells[block_start..i]
            .iter()
            .map(|row| row[col].chars().count())
            .max()
            .unwrap_or(0)
            + COLUMN_PADDING;
        for row_widths in &mut widths[block_start..i] {
            row_widths.push(width);
        }
        align_column(cells, widths, col + 1, block_start, i);
    }
}
