//! Playlist rendering: fetch the feed once the page has loaded and append one
//! table row per entry.
//!
//! Row shape: `<tr><td><time datetime="{timeDatetime}">{when}</time></td>
//! <td>{artist}</td><td>{title}</td><td class="duration">{length}</td></tr>`.

use thiserror::Error;

use crate::fetch::{self, FetchError, PLAYLIST_ENDPOINT};
use crate::page::{Document, Element, Row, Table};
use crate::playlist::PlaylistEntry;

/// Class marking the cell that shows track length.
pub const DURATION_CLASS: &str = "duration";

/// Logged once when the page is brought up.
pub const WELCOME_MESSAGE: &str = "Welcome to the BrightShinyRadio website!";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("document has no table to render the playlist into")]
    NoTable,
}

/// Build the row for one entry.
pub fn entry_row(entry: &PlaylistEntry) -> Row {
    let mut row = Row::new();

    let mut time = Element::new("time");
    time.set_attribute("datetime", &entry.time_datetime);
    time.append_text(&entry.when);
    row.insert_cell().append_child(time);

    row.insert_cell().append_text(&entry.artist);
    row.insert_cell().append_text(&entry.title);

    let length = row.insert_cell();
    length.set_attribute("class", DURATION_CLASS);
    length.append_text(&entry.length);

    row
}

/// Append one row per entry to `table`, in entry order. Rows are built before any
/// is appended. Returns the number of rows appended.
pub fn render_entries(table: &mut Table, entries: &[PlaylistEntry]) -> usize {
    let rows: Vec<Row> = entries.iter().map(entry_row).collect();
    let count = rows.len();
    table.append_rows(rows);
    count
}

/// Fetches the playlist feed and renders it into a loaded page.
#[derive(Debug, Clone)]
pub struct PlaylistRenderer {
    endpoint: String,
}

impl Default for PlaylistRenderer {
    fn default() -> Self {
        Self::new(PLAYLIST_ENDPOINT)
    }
}

impl PlaylistRenderer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Content-loaded hook. Consumes the renderer, so it runs at most once.
    ///
    /// Any failure is logged and leaves the document untouched. Returns the number
    /// of rows appended.
    pub async fn on_content_loaded(self, document: &mut Document) -> usize {
        let endpoint = self.endpoint.clone();
        match self.fetch_and_render(document).await {
            Ok(rows) => {
                tracing::info!(endpoint = %endpoint, rows, "playlist rendered");
                rows
            }
            Err(err) => {
                tracing::error!("Unable to fetch data: {}", err);
                0
            }
        }
    }

    /// Fetch the feed and append its rows to the first table of `document`.
    /// Consumes the renderer: one fetch per renderer.
    pub async fn fetch_and_render(self, document: &mut Document) -> Result<usize, RenderError> {
        let entries = fetch::fetch_playlist(&self.endpoint).await?;
        if entries.is_empty() {
            return Ok(0);
        }
        let table = document.first_table_mut().ok_or(RenderError::NoTable)?;
        Ok(render_entries(table, &entries))
    }
}
