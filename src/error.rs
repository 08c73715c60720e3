use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Start date {from} is after end date {to}")]
    EmptyRange { from: NaiveDate, to: NaiveDate },

    #[error("Please set cookie_sid and cookie_csid environment variables.")]
    MissingCredentials,

    #[error("Failed to create output directory {}: {source}", path.display())]
    Outdir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Feed(#[from] FeedError),
}

/// Errors from the activity feed endpoint. All of these abort the run:
/// without a full trip listing there is no forward progress to make.
#[derive(Debug, Error)]
pub(crate) enum FeedError {
    #[error("Activity feed request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("Activity feed returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Unexpected activity feed response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
