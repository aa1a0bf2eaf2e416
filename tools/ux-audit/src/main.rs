use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ux_audit::config::AuditProfile;
use ux_audit::error::Result;
use ux_audit::signals::{self, DeviceContext};
use ux_audit::{reporter, Auditor};

/// Score a captured page render against the UX heuristics.
#[derive(Parser, Debug)]
#[command(name = "ux-audit", version)]
struct Cli {
    /// JSON signal bundle captured by the page-signal provider.
    signals: PathBuf,

    /// Device the signals were captured for.
    #[arg(long, default_value = "mobile")]
    device: DeviceContext,

    /// Threshold profile: `standard`, `strict`, or a path to a JSON profile.
    #[arg(long, default_value = "standard")]
    profile: String,

    /// Print the report as JSON instead of the colored listing.
    #[arg(long)]
    json: bool,

    /// Exit with status 1 when the overall score is below this value.
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    fail_under: Option<u8>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let profile = AuditProfile::resolve(&cli.profile)?;
    let signals = signals::load_signals(&cli.signals)?;

    let report = Auditor::new(profile).run(&signals, cli.device);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: failed to serialize report: {err}");
                return Ok(2);
            }
        }
    } else {
        reporter::print_report(&cli.signals.display().to_string(), cli.device, &report);
    }

    let below_threshold = cli
        .fail_under
        .is_some_and(|min| report.overall_score() < min);
    Ok(if below_threshold { 1 } else { 0 })
}
