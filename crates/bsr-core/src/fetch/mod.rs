//! Playlist feed retrieval.
//!
//! One plain GET to the feed endpoint through the curl crate (libcurl): no query
//! parameters, no request body, no custom headers. No connect or transfer deadline
//! is set; the request runs until it completes or fails.

mod error;

pub use error::FetchError;

use crate::playlist::{self, PlaylistEntry};

/// Default playlist feed endpoint.
pub const PLAYLIST_ENDPOINT: &str = "https://ev0sbdo455.execute-api.us-east-1.amazonaws.com/prod";

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

impl Response {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a GET and buffers the whole body.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking` if used
/// from async code.
pub fn get(url: &str) -> Result<Response, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(Response { status, body })
}

/// Blocking fetch: GET the endpoint, reject non-2xx, decode the body.
pub fn fetch_playlist_blocking(url: &str) -> Result<Vec<PlaylistEntry>, FetchError> {
    let response = get(url)?;
    tracing::debug!(
        endpoint = url,
        status = response.status,
        bytes = response.body.len(),
        "playlist response received"
    );
    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }
    Ok(playlist::parse_feed(&response.body)?)
}

/// Fetch and decode the playlist feed.
///
/// The transfer runs on the blocking pool; awaiting it is the only suspension point.
pub async fn fetch_playlist(url: &str) -> Result<Vec<PlaylistEntry>, FetchError> {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || fetch_playlist_blocking(&url)).await?
}
