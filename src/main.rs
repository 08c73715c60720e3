mod api;
mod cli;
mod config;
mod consts;
mod credentials;
mod driver;
mod error;
mod receipt;
mod utils;

use clap::Parser;

use api::FeedClient;
use cli::Cli;
use config::Config;
use consts::BASE_URL;
use credentials::Credentials;
use error::AppError;
use receipt::ReceiptClient;
use utils::{SleepPacer, parse_date};

fn main() {
    let cli = Cli::parse().with_config(&Config::load());

    // Credential gate: refuse to proceed before any network activity.
    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, credentials) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, credentials: Credentials) -> Result<(), AppError> {
    let from = parse_date(&cli.from)?;
    let to = parse_date(&cli.to)?;
    if from > to {
        return Err(AppError::EmptyRange { from, to });
    }
    println!("Date range: {from} to {to}");

    let agent = api::agent();
    let feed = FeedClient::new(agent.clone(), BASE_URL, credentials.clone());
    let receipts = ReceiptClient::new(agent, BASE_URL, credentials);
    let pacer = SleepPacer::new(cli.receipt_delay(), cli.page_delay());

    let stats = driver::run(
        &feed,
        &receipts,
        &pacer,
        from,
        to,
        &cli.outdir(),
        cli.separator(),
    )?;

    println!(
        "Done: {} receipts downloaded, {} trips without receipts, {} failed ({} months, {} pages)",
        stats.downloaded, stats.missing, stats.failed, stats.months, stats.pages
    );
    Ok(())
}
