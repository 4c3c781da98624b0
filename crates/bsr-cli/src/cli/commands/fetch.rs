//! `bsr fetch` – print the current playlist feed.

use anyhow::{Context, Result};
use bsr_core::fetch;

pub async fn run_fetch(endpoint: &str) -> Result<()> {
    let entries = fetch::fetch_playlist(endpoint)
        .await
        .with_context(|| format!("fetch playlist from {endpoint}"))?;
    if entries.is_empty() {
        println!("Playlist is empty.");
        return Ok(());
    }
    println!("{:<22} {:<24} {:<32} {}", "WHEN", "ARTIST", "TITLE", "LENGTH");
    for e in entries {
        println!("{:<22} {:<24} {:<32} {}", e.when, e.artist, e.title, e.length);
    }
    Ok(())
}
