use std::time::Duration;

use clap::{Parser, Subcommand};

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }
}

// Structs

#[derive(Parser, Debug)]
#[command(name = "accounting-report", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    //
    // Global args start here..
    //

    //
    /// Main API URL, for example 'https://api.sys.example.com'.
    /// Falls back to the target of the current cf session.
    #[arg(long, env = "CF_API_ENDPOINT", global = true)]
    pub api_endpoint: Option<String>,

    /// Already formatted authorization value, for example 'bearer eyJ...'.
    /// Falls back to the token of the current cf session.
    #[arg(long, env = "CF_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub access_token: Option<String>,

    /// Give up on the request after this many seconds.
    #[arg(
        long,
        env = "ACCOUNTING_REPORT_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_secs: u64,

    /// Skip animations
    #[arg(long, default_value_t = false, global = true)]
    pub no_animate: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists usage data of purchased resources.
    AccountingReport(ReportArgs),

    /// Print the plugin command metadata as JSON.
    #[command(hide = true)]
    Metadata,
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct ReportArgs {
    /// Print JSON to stdout instead of a rendered table.
    #[arg(long, default_value_t = false)]
    pub output_json: bool,

    /// Report application instance usage. This is the default.
    #[arg(long, default_value_t = false)]
    pub applications: bool,

    /// Report service instance usage. Wins over --applications.
    #[arg(long, default_value_t = false)]
    pub services: bool,
}

/// Which report a single invocation fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Applications,
    Services,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Everything fetch and render need to know, settled once after parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub selection: Selection,
    pub format: OutputFormat,
    pub timeout: Duration,
}

impl ReportConfig {
    pub fn new(args: &ReportArgs, timeout_secs: u64) -> Self {
        // --applications only restates the default, so it never beats --services.
        let selection = match args.services {
            true => Selection::Services,
            false => Selection::Applications,
        };

        let format = match args.output_json {
            true => OutputFormat::Json,
            false => OutputFormat::Table,
        };

        ReportConfig {
            selection,
            format,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
