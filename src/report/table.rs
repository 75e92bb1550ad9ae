//! Fixed-width text tables for diff code blocks

/// A left-aligned text table
///
/// Each cell is padded to the widest cell of its column and columns are
/// separated by two spaces. Rows may have different numbers of cells.
///
/// # Examples
///
/// ```
/// use bloat_report::report::TextTable;
///
/// let mut table = TextTable::new();
/// table.push_row(["- Size", "1.00 KB"]);
/// table.push_row(["+ Size", "2.00 KB", "+1.00 KB"]);
/// assert_eq!(
///     table.render(),
///     "- Size  1.00 KB\n+ Size  2.00 KB  +1.00 KB"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    rows: Vec<Vec<String>>,
}

impl TextTable {
    const SEPARATOR: &'static str = "  ";

    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render rows joined by newlines, without a trailing newline
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        self.rows
            .iter()
            .map(|row| {
                let line = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, width)| pad(cell, *width))
                    .collect::<Vec<_>>()
                    .join(Self::SEPARATOR);
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}
