//! Receipt fetcher
//!
//! Fetches the PDF receipt for a single trip and writes it to the output
//! directory. Failures here are deliberately isolated per trip: a missing or
//! broken receipt never stops the batch.

use std::fs;
use std::path::{Path, PathBuf};

use ureq::Agent;
use ureq::http::StatusCode;

use crate::credentials::Credentials;

/// Result of asking the platform for one trip's receipt.
#[derive(Debug)]
pub(crate) enum ReceiptOutcome {
    Fetched(Vec<u8>),
    /// 404 from the receipt endpoint; expected for cancelled trips.
    NotFound,
    Failed(String),
}

pub(crate) trait ReceiptSource {
    fn fetch_receipt(&self, trip_uuid: &str) -> ReceiptOutcome;
}

pub(crate) struct ReceiptClient {
    agent: Agent,
    base_url: String,
    credentials: Credentials,
}

impl ReceiptClient {
    pub(crate) fn new(agent: Agent, base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            agent,
            base_url: base_url.into(),
            credentials,
        }
    }
}

impl ReceiptSource for ReceiptClient {
    fn fetch_receipt(&self, trip_uuid: &str) -> ReceiptOutcome {
        let url = format!(
            "{}/trips/{}/receipt?contentType=PDF",
            self.base_url, trip_uuid
        );
        let result = self
            .agent
            .get(url.as_str())
            .header("Cookie", self.credentials.cookie_header())
            .call();

        match result {
            Ok(mut response) => {
                let status = response.status();
                if status == StatusCode::NOT_FOUND {
                    return ReceiptOutcome::NotFound;
                }
                if !status.is_success() {
                    return ReceiptOutcome::Failed(format!("HTTP {}", status.as_u16()));
                }
                match response.body_mut().read_to_vec() {
                    Ok(bytes) => ReceiptOutcome::Fetched(bytes),
                    Err(e) => ReceiptOutcome::Failed(e.to_string()),
                }
            }
            Err(e) => ReceiptOutcome::Failed(e.to_string()),
        }
    }
}

/// Deterministic receipt filename; re-runs overwrite the same file.
/// The date text is used verbatim from the feed subtitle.
pub(crate) fn receipt_filename(trip_date: &str, trip_uuid: &str) -> String {
    format!("{trip_date}_{trip_uuid}.pdf")
}

/// Persist (or log) one receipt outcome. Write failures are reported and
/// swallowed like any other per-trip failure.
pub(crate) fn save_receipt(
    outcome: &ReceiptOutcome,
    trip_uuid: &str,
    trip_date: &str,
    outdir: &Path,
) {
    match outcome {
        ReceiptOutcome::Fetched(bytes) => {
            let path: PathBuf = outdir.join(receipt_filename(trip_date, trip_uuid));
            match fs::write(&path, bytes) {
                Ok(()) => println!("Downloaded receipt: {}", path.display()),
                Err(e) => eprintln!("Error writing receipt for trip {trip_uuid}: {e}"),
            }
        }
        ReceiptOutcome::NotFound => {
            println!("No receipt available for trip {trip_uuid} (possibly cancelled)");
        }
        ReceiptOutcome::Failed(reason) => {
            eprintln!("Error downloading receipt for trip {trip_uuid}: {reason}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_deterministic() {
        let a = receipt_filename("03/14/2024", "abc-123");
        let b = receipt_filename("03/14/2024", "abc-123");
        assert_eq!(a, b);
        assert_eq!(a, "03/14/2024_abc-123.pdf");
    }

    #[test]
    fn filename_uses_date_verbatim() {
        assert_eq!(
            receipt_filename("14. März 2024", "uuid"),
            "14. März 2024_uuid.pdf"
        );
    }

    #[test]
    fn save_fetched_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = ReceiptOutcome::Fetched(b"%PDF-1.4 fake".to_vec());
        save_receipt(&outcome, "trip-1", "2024-03-14", dir.path());
        let written = std::fs::read(dir.path().join("2024-03-14_trip-1.pdf")).unwrap();
        assert_eq!(written, b"%PDF-1.4 fake");
    }

    #[test]
    fn save_not_found_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        save_receipt(&ReceiptOutcome::NotFound, "trip-1", "2024-03-14", dir.path());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn save_failed_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = ReceiptOutcome::Failed("HTTP 500".to_string());
        save_receipt(&outcome, "trip-1", "2024-03-14", dir.path());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
