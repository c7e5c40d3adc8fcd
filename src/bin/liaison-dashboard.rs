//! One-shot analytics report for a support backend.
//!
//! Fetches the aggregate dashboard report and renders it as text with
//! bar charts for query volume and intents. Exits non-zero if the
//! backend cannot be reached.
//!
//! ```bash
//! liaison-dashboard --base-url https://support.example.com/
//! liaison-dashboard --no-color > report.txt
//! ```

use std::process::ExitCode;

use arrrg::CommandLine;

use liaison::chat::{BASE_URL_ENV, DEFAULT_BASE_URL};
use liaison::{SupportClient, render_dashboard};

/// Command-line arguments for the liaison-dashboard tool.
#[derive(arrrg_derive::CommandLine, Debug, Default, PartialEq, Eq)]
struct DashboardArgs {
    /// Backend base URL.
    #[arrrg(optional, "Backend base URL (default: http://localhost:5000/)", "URL")]
    base_url: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    no_color: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let (args, _) = DashboardArgs::from_command_line_relaxed("liaison-dashboard [OPTIONS]");
    let base_url = args
        .base_url
        .or_else(|| std::env::var(BASE_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = match SupportClient::new(&base_url) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("invalid base URL {}: {}", base_url, err);
            return ExitCode::FAILURE;
        }
    };

    match client.dashboard().await {
        Ok(report) => {
            print!("{}", render_dashboard(&report, !args.no_color));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to fetch dashboard from {}: {}", base_url, err);
            ExitCode::FAILURE
        }
    }
}
