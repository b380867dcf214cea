//! fixplan - Build a package upgrade plan from vulnerability scan reports
//!
//! Reads a scan report as JSON on standard input and prints, per package,
//! the farthest version that fixes everything reported against it.
//!
//! Examples:
//!   cat api-issues.json | fixplan --api
//!   cat scan-report.json | fixplan --cli --format table
//!
//! Exit codes:
//!   0 - Success (including the usage hints printed without piped input)
//!   1 - Runtime error (malformed report, unwritable output file, etc.)

use anyhow::{Context, Result};
use clap::Parser;
use fixplan::{
    config::Config,
    model::{Mode, RawIssue},
    output::{format_plan_to_string, print_plan, OutputFormat},
    parser::{parser_for, ReportParser},
    planner::build_plan,
};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{debug, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Exit codes for CI integration
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser, Debug)]
#[command(name = "fixplan")]
#[command(
    author,
    version,
    about = "Build a package upgrade plan from vulnerability scan reports"
)]
struct Args {
    /// Read an API issues report from standard input
    #[arg(long, conflicts_with = "cli")]
    api: bool,

    /// Read a CLI test report from standard input
    #[arg(long)]
    cli: bool,

    /// Output format (json, table)
    #[arg(short, long)]
    format: Option<String>,

    /// Write the plan to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generate a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    /// Returns the log level based on verbosity settings.
    fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn run() -> Result<u8> {
    let args = Args::parse();

    init_logging(&args);

    if args.init_config {
        handle_init_config()?;
        return Ok(exit_codes::SUCCESS);
    }

    let config = load_config(&args)?;

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        println!("The command is intended to work with pipes.");
        return Ok(exit_codes::SUCCESS);
    }

    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("failed to read standard input")?;

    if input.trim().is_empty() {
        println!("The command is intended to work with pipes.");
        return Ok(exit_codes::SUCCESS);
    }

    let mode = match Mode::from_flags(args.api, args.cli) {
        Some(mode) => mode,
        None => {
            println!("--api or --cli is required");
            return Ok(exit_codes::SUCCESS);
        }
    };

    debug!("parsing input as {} report", mode.display_name());
    let mut issues = parser_for(mode).parse(&input)?;
    apply_ignores(&mut issues, &config);

    let plan = build_plan(&issues);

    let format_str = args.format.unwrap_or(config.default_format.clone());
    let format = OutputFormat::from_str(&format_str).map_err(|e| anyhow::anyhow!(e))?;

    if let Some(path) = args.output {
        let content = format_plan_to_string(&plan, format)?;
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write plan to {}", path))?;
        if format == OutputFormat::Table {
            println!("Plan written to: {}", path);
        }
    } else {
        print_plan(&plan, format)?;
    }

    Ok(exit_codes::SUCCESS)
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to standard error; standard output carries the plan.
fn init_logging(args: &Args) {
    let level = args.log_level();
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Drop issues matched by the config ignore lists.
fn apply_ignores(issues: &mut Vec<RawIssue>, config: &Config) {
    let before = issues.len();
    issues.retain(|issue| {
        !config.ignore.should_ignore_package(&issue.package_name)
            && !config.ignore.should_ignore_vulnerability(&issue.id)
    });
    if issues.len() < before {
        debug!("ignored {} issues via config", before - issues.len());
    }
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(ref path) = args.config {
        debug!("loading config from {}", path.display());
        return Config::load_from(path);
    }

    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}

/// Handle --init-config: write a default config file.
fn handle_init_config() -> Result<()> {
    let config_path = Config::config_path();

    if config_path.exists() {
        println!("Config file already exists at: {}", config_path.display());
        return Ok(());
    }

    let config = Config::default();
    config.save()?;
    println!("Created config file at: {}", config_path.display());
    println!();
    println!("Default configuration:");
    println!("{}", Config::generate_default_config());
    Ok(())
}
