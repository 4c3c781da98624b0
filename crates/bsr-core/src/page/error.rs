use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("cannot read page {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write page {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
