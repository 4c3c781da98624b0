//! `bsr render` – fill a page's playlist table from the feed.

use anyhow::Result;
use bsr_core::page::Document;
use bsr_core::render::{PlaylistRenderer, WELCOME_MESSAGE};
use std::io::Write;
use std::path::Path;

/// Load `page`, fire the content-loaded hook once, then write the page.
///
/// A failed fetch is logged by the renderer and the page is written unchanged.
pub async fn run_render(page: &Path, output: Option<&Path>, endpoint: &str) -> Result<()> {
    tracing::info!("{}", WELCOME_MESSAGE);

    let mut document = Document::load(page)?;
    tracing::debug!(
        page = %page.display(),
        tables = document.table_count(),
        "page loaded"
    );

    let rows = PlaylistRenderer::new(endpoint)
        .on_content_loaded(&mut document)
        .await;

    match output {
        Some(path) => {
            document.write_to(path)?;
            tracing::info!(rows, output = %path.display(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.to_html().as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
