//! The pre-rendered page that playlist rows are rendered into.
//!
//! A [`Document`] keeps the page source as loaded and records rows appended to its
//! tables. Serializing reproduces the source byte for byte, with the appended rows
//! spliced in where `insertRow()` would have put them.

mod error;
mod node;
mod scan;
mod table;

pub use error::PageError;
pub use node::{Cell, Element, Node, Row};
pub use table::Table;

use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    /// Tables in document order (order of their start tags).
    tables: Vec<Table>,
}

impl Document {
    /// Scan a page source. Never fails: markup the scanner does not understand is
    /// left as text.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let tags = scan::scan_tags(&source);
        let tables = tags
            .iter()
            .enumerate()
            .filter(|(_, tag)| tag.is_start("table"))
            .map(|(i, _)| Table::new(table::analyze(&tags, i, source.len())))
            .collect();
        Self { source, tables }
    }

    /// Read and scan a page file.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let source = fs::read_to_string(path).map_err(|source| PageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(source))
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn table(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    pub fn table_mut(&mut self, index: usize) -> Option<&mut Table> {
        self.tables.get_mut(index)
    }

    /// The first `<table>` in the document, if any.
    pub fn first_table_mut(&mut self) -> Option<&mut Table> {
        self.tables.first_mut()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The page with all appended rows spliced in.
    pub fn to_html(&self) -> String {
        let mut inserts: Vec<&Table> = self
            .tables
            .iter()
            .filter(|t| !t.appended_rows().is_empty())
            .collect();
        // Stable: tables sharing an offset keep document order.
        inserts.sort_by_key(|t| t.insertion_offset());

        let mut out = String::with_capacity(self.source.len());
        let mut copied = 0;
        for table in inserts {
            let offset = table.insertion_offset();
            out.push_str(&self.source[copied..offset]);
            table.write_appended(&mut out);
            copied = offset;
        }
        out.push_str(&self.source[copied..]);
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<(), PageError> {
        fs::write(path, self.to_html()).map_err(|source| PageError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
