//! Month-range driver
//!
//! Walks the requested date range one calendar month at a time, pages
//! through the activity feed for each month window, and fetches the receipt
//! for every trip it finds. Strictly sequential: months, pages, then trips.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::api::ActivityFeed;
use crate::error::AppError;
use crate::receipt::{ReceiptOutcome, ReceiptSource, save_receipt};
use crate::utils::{Pacer, month_windows};

/// Counters for the end-of-run summary.
#[derive(Debug, Default)]
pub(crate) struct RunStats {
    pub(crate) months: usize,
    pub(crate) pages: usize,
    pub(crate) downloaded: usize,
    pub(crate) missing: usize,
    pub(crate) failed: usize,
}

pub(crate) fn run(
    feed: &dyn ActivityFeed,
    receipts: &dyn ReceiptSource,
    pacer: &dyn Pacer,
    from: NaiveDate,
    to: NaiveDate,
    outdir: &Path,
    separator: &str,
) -> Result<RunStats, AppError> {
    fs::create_dir_all(outdir).map_err(|source| AppError::Outdir {
        path: outdir.to_path_buf(),
        source,
    })?;

    let mut stats = RunStats::default();
    for window in month_windows(from, to) {
        println!("Processing: {}", window.label());
        stats.months += 1;

        let mut next_page_token = String::new();
        loop {
            let page = feed.fetch_page(
                &next_page_token,
                window.start_time_ms(),
                window.end_time_ms(),
            )?;
            stats.pages += 1;

            for activity in &page.activities {
                let trip_date = activity.trip_date(separator);
                let outcome = receipts.fetch_receipt(&activity.uuid);
                match outcome {
                    ReceiptOutcome::Fetched(_) => stats.downloaded += 1,
                    ReceiptOutcome::NotFound => stats.missing += 1,
                    ReceiptOutcome::Failed(_) => stats.failed += 1,
                }
                save_receipt(&outcome, &activity.uuid, trip_date, outdir);
                pacer.after_receipt();
            }

            next_page_token = page.next_page_token;
            if next_page_token.is_empty() {
                break;
            }
            pacer.after_page();
        }
    }

    Ok(stats)
}
