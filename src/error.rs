use std::io;

use thiserror::Error;

/// Failure classes shared by the three asset batches.
///
/// Per-item failures are collected into outcomes rather than aborting a
/// batch; only setup failures (missing directory, unopenable log file,
/// unreadable recipe table) surface out of a subcommand.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("svg error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("invalid image payload: {0}")]
    InvalidImage(String),

    #[error("could not allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("invalid recipe table {path}: {reason}")]
    RecipeTable { path: String, reason: String },
}
