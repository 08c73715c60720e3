//! CLI argument definitions
//!
//! Flags plus config-file merging: explicit CLI values take precedence,
//! config fills the rest, built-in defaults last.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::consts::{
    DEFAULT_OUTDIR, DEFAULT_PAGE_DELAY, DEFAULT_RECEIPT_DELAY, DEFAULT_SEPARATOR,
};

#[derive(Parser)]
#[command(name = "ride-receipts")]
#[command(about = "Download trip receipt PDFs from your rider account", version)]
pub(crate) struct Cli {
    /// Output directory for receipts
    #[arg(long, value_name = "DIR")]
    pub(crate) outdir: Option<PathBuf>,

    /// Start date (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) from: String,

    /// End date (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) to: String,

    /// Pause after each receipt download, in milliseconds
    #[arg(long, value_name = "MS")]
    pub(crate) receipt_delay_ms: Option<u64>,

    /// Pause between feed page fetches, in milliseconds
    #[arg(long, value_name = "MS")]
    pub(crate) page_delay_ms: Option<u64>,

    /// Token separating the trip date from the rest of the feed subtitle
    #[arg(long, value_name = "TOKEN")]
    pub(crate) separator: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.outdir.is_none() {
            self.outdir = config.outdir.clone().map(PathBuf::from);
        }
        if self.receipt_delay_ms.is_none() {
            self.receipt_delay_ms = config.receipt_delay_ms;
        }
        if self.page_delay_ms.is_none() {
            self.page_delay_ms = config.page_delay_ms;
        }
        if self.separator.is_none() {
            self.separator = config.separator.clone();
        }
        self
    }

    pub(crate) fn outdir(&self) -> PathBuf {
        self.outdir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTDIR))
    }

    pub(crate) fn receipt_delay(&self) -> Duration {
        self.receipt_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RECEIPT_DELAY)
    }

    pub(crate) fn page_delay(&self) -> Duration {
        self.page_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_PAGE_DELAY)
    }

    pub(crate) fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_without_config() {
        let cli = parse(&["ride-receipts", "--from", "20240101", "--to", "20240131"]);
        assert_eq!(cli.outdir(), PathBuf::from("receipts"));
        assert_eq!(cli.receipt_delay(), Duration::from_secs(1));
        assert_eq!(cli.page_delay(), Duration::from_secs(5));
        assert_eq!(cli.separator(), " \u{2022} ");
    }

    #[test]
    fn from_and_to_are_required() {
        assert!(Cli::try_parse_from(["ride-receipts", "--from", "20240101"]).is_err());
        assert!(Cli::try_parse_from(["ride-receipts"]).is_err());
    }

    #[test]
    fn config_fills_unset_values() {
        let cli = parse(&["ride-receipts", "--from", "20240101", "--to", "20240131"]);
        let config = Config {
            outdir: Some("archive".to_string()),
            receipt_delay_ms: Some(100),
            page_delay_ms: None,
            separator: Some(" - ".to_string()),
        };
        let cli = cli.with_config(&config);
        assert_eq!(cli.outdir(), PathBuf::from("archive"));
        assert_eq!(cli.receipt_delay(), Duration::from_millis(100));
        assert_eq!(cli.page_delay(), Duration::from_secs(5));
        assert_eq!(cli.separator(), " - ");
    }

    #[test]
    fn cli_wins_over_config() {
        let cli = parse(&[
            "ride-receipts",
            "--from",
            "20240101",
            "--to",
            "20240131",
            "--outdir",
            "cli-dir",
            "--receipt-delay-ms",
            "0",
        ]);
        let config = Config {
            outdir: Some("config-dir".to_string()),
            receipt_delay_ms: Some(100),
            page_delay_ms: None,
            separator: None,
        };
        let cli = cli.with_config(&config);
        assert_eq!(cli.outdir(), PathBuf::from("cli-dir"));
        assert_eq!(cli.receipt_delay(), Duration::ZERO);
    }
}
