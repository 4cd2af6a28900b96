//! Table formatting for CLI output.

use comfy_table::{Cell, ContentArrangement, Table as ComfyTable};

use crate::iostreams::IOStreams;

/// Table printer that adapts output based on TTY/non-TTY mode.
///
/// On a terminal, columns are aligned and headers shown; otherwise each row
/// is printed tab-separated for scripting.
#[derive(Debug)]
pub struct TablePrinter {
    is_tty: bool,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TablePrinter {
    /// Create a new table printer.
    pub fn new(ios: &IOStreams) -> Self {
        Self {
            is_tty: ios.is_stdout_tty(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Set table headers. Only rendered on a TTY.
    #[must_use]
    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|h| h.to_uppercase()).collect();
        self
    }

    /// Add a row of values.
    pub fn add_row(&mut self, fields: Vec<String>) {
        self.rows.push(fields);
    }

    /// Render the table to a string.
    pub fn render(&self) -> String {
        if self.is_tty {
            self.render_tty()
        } else {
            self.render_plain()
        }
    }

    fn render_tty(&self) -> String {
        let mut table = ComfyTable::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.load_preset(comfy_table::presets::NOTHING);

        if !self.headers.is_empty() {
            let header_cells: Vec<Cell> = self.headers.iter().map(Cell::new).collect();
            table.set_header(header_cells);
        }

        for row in &self.rows {
            let cells: Vec<Cell> = row.iter().map(Cell::new).collect();
            table.add_row(cells);
        }

        table.to_string()
    }

    fn render_plain(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
