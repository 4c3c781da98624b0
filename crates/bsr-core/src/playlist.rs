//! Playlist feed records.
//!
//! The feed is a JSON array of entries, most recent broadcast first. Every field
//! is a display-ready string; nothing here reformats them.

use serde::{Deserialize, Serialize};

/// One broadcast record from the playlist feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Human-readable broadcast time, e.g. `"10:00AM 01/01/2024"`.
    pub when: String,
    /// Machine-readable timestamp for the `<time datetime>` attribute.
    #[serde(rename = "timeDatetime")]
    pub time_datetime: String,
    pub artist: String,
    pub title: String,
    /// Display duration, e.g. `"3:45"`.
    pub length: String,
}

/// Decode a feed body into entries, keeping feed order.
///
/// All or nothing: one entry with a missing or non-string field rejects the feed.
pub fn parse_feed(body: &[u8]) -> Result<Vec<PlaylistEntry>, serde_json::Error> {
    serde_json::from_slice(body)
}
