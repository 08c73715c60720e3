use std::time::Duration;

/// Rider web origin; all requests ride the browser session cookies.
pub(crate) const BASE_URL: &str = "https://riders.uber.com";

/// Browser User-Agent sent with every request.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/119.0";

/// Activities per feed page.
pub(crate) const PAGE_LIMIT: u32 = 10;

/// Fallback output directory when neither CLI nor config set one.
pub(crate) const DEFAULT_OUTDIR: &str = "receipts";

/// Token separating the trip date from the location text in feed subtitles.
pub(crate) const DEFAULT_SEPARATOR: &str = " \u{2022} ";

/// Courtesy pause after each receipt download.
pub(crate) const DEFAULT_RECEIPT_DELAY: Duration = Duration::from_secs(1);

/// Courtesy pause between feed page fetches.
pub(crate) const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(5);
