//! Table structure analysis and the table handle rows are appended to.
//!
//! Appending follows `HTMLTableElement.insertRow()` with no index: new rows go
//! into the section holding the last row of the table (head rows, then body rows,
//! then foot rows), else into the last `<tbody>`, else into a new `<tbody>` at the
//! end of the table. `<tr>` written directly under `<table>` belongs to the
//! implicit body section an HTML parser creates for it.

use super::node::Row;
use super::scan::{Tag, TagKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Head,
    Body,
    Foot,
}

impl SectionKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "thead" => Some(SectionKind::Head),
            "tbody" => Some(SectionKind::Body),
            "tfoot" => Some(SectionKind::Foot),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Section {
    kind: SectionKind,
    rows: usize,
    /// Offset where the section's content ends (its end tag, or where it is
    /// implicitly closed). None while still open.
    close_at: Option<usize>,
}

/// Where appended rows are spliced into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InsertionPoint {
    pub offset: usize,
    /// No body section exists and the table has no rows: wrap in a new `<tbody>`.
    pub wrap_in_tbody: bool,
}

/// Shape of one table in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableLayout {
    pub existing_rows: usize,
    pub insertion: InsertionPoint,
}

/// Analyse the table opened by `tags[open]`. Nested tables are skipped. A table
/// with no end tag extends to `src_len`.
pub(crate) fn analyze(tags: &[Tag], open: usize, src_len: usize) -> TableLayout {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;
    let mut nested = 0usize;
    let mut table_end = src_len;

    fn close(sections: &mut [Section], current: &mut Option<usize>, at: usize) {
        if let Some(i) = current.take() {
            sections[i].close_at.get_or_insert(at);
        }
    }

    for tag in &tags[open + 1..] {
        if tag.name == "table" {
            match tag.kind {
                TagKind::Start => nested += 1,
                TagKind::End if nested > 0 => nested -= 1,
                TagKind::End => {
                    table_end = tag.start;
                    break;
                }
            }
            continue;
        }
        if nested > 0 {
            continue;
        }

        if let Some(kind) = SectionKind::from_name(&tag.name) {
            match tag.kind {
                TagKind::Start => {
                    close(&mut sections, &mut current, tag.start);
                    sections.push(Section {
                        kind,
                        rows: 0,
                        close_at: None,
                    });
                    current = Some(sections.len() - 1);
                }
                TagKind::End => {
                    if current.is_some_and(|i| sections[i].kind == kind) {
                        close(&mut sections, &mut current, tag.start);
                    }
                }
            }
        } else if tag.is_start("tr") {
            let index = match current {
                Some(i) => i,
                None => {
                    sections.push(Section {
                        kind: SectionKind::Body,
                        rows: 0,
                        close_at: None,
                    });
                    sections.len() - 1
                }
            };
            current = Some(index);
            sections[index].rows += 1;
        }
    }
    close(&mut sections, &mut current, table_end);

    let last_with_rows =
        |kind: SectionKind| sections.iter().rposition(|s| s.kind == kind && s.rows > 0);
    let target = last_with_rows(SectionKind::Foot)
        .or_else(|| last_with_rows(SectionKind::Body))
        .or_else(|| last_with_rows(SectionKind::Head))
        .or_else(|| sections.iter().rposition(|s| s.kind == SectionKind::Body));

    let insertion = match target {
        Some(i) => InsertionPoint {
            offset: sections[i].close_at.unwrap_or(table_end),
            wrap_in_tbody: false,
        },
        None => InsertionPoint {
            offset: table_end,
            wrap_in_tbody: true,
        },
    };

    TableLayout {
        existing_rows: sections.iter().map(|s| s.rows).sum(),
        insertion,
    }
}

/// A table in a [`Document`](super::Document) that rows can be appended to.
#[derive(Debug, Clone)]
pub struct Table {
    layout: TableLayout,
    appended: Vec<Row>,
}

impl Table {
    pub(crate) fn new(layout: TableLayout) -> Self {
        Self {
            layout,
            appended: Vec::new(),
        }
    }

    /// Append an empty row after all existing and appended rows and return it.
    pub fn insert_row(&mut self) -> &mut Row {
        let index = self.appended.len();
        self.appended.push(Row::new());
        &mut self.appended[index]
    }

    /// Append fully built rows in order.
    pub fn append_rows(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.appended.extend(rows);
    }

    /// Rows appended since the page was loaded.
    pub fn appended_rows(&self) -> &[Row] {
        &self.appended
    }

    /// Rows present in the page source plus appended rows.
    pub fn row_count(&self) -> usize {
        self.layout.existing_rows + self.appended.len()
    }

    pub(crate) fn insertion_offset(&self) -> usize {
        self.layout.insertion.offset
    }

    pub(crate) fn write_appended(&self, out: &mut String) {
        if self.appended.is_empty() {
            return;
        }
        let wrap = self.layout.insertion.wrap_in_tbody;
        if wrap {
            out.push_str("<tbody>");
        }
        for row in &self.appended {
            row.write_html(out);
        }
        if wrap {
            out.push_str("</tbody>");
        }
    }
}
