use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use version_gate::Version;
use version_gate::check::{Bounds, ordering_symbol};
use version_gate::config::{Config, OutputFormat};
use version_gate::logging::init_logging;
use version_gate::selftest;

#[derive(Parser)]
#[command(name = "version-gate")]
#[command(version, about = "Parse, compare and gate on free-form version strings")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form and components of a version
    Parse { input: String },
    /// Compare two versions and print <, = or >
    Compare { left: String, right: String },
    /// Exit 0 iff the version satisfies every given bound
    Check {
        input: String,
        #[command(flatten)]
        bounds: Bounds,
    },
    /// Run the built-in self-test
    SelfTest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let _guard = init_logging(&config.log)?;
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Command::Parse { input } => {
            let version = Version::parse(&input)?;
            match format {
                OutputFormat::Text => {
                    let components: Vec<&str> =
                        version.components().iter().map(|c| c.as_str()).collect();
                    println!("{} [{}]", version, components.join(", "))
                }
                OutputFormat::Json => println!(
                    "{}",
                    json!({ "version": version, "components": version.components() })
                ),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Compare { left, right } => {
            let symbol = ordering_symbol(Version::parse(&left)?.compare(right.as_str())?);
            match format {
                OutputFormat::Text => println!("{}", symbol),
                OutputFormat::Json => println!("{}", json!({ "ordering": symbol })),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { input, bounds } => {
            let satisfied = bounds.satisfied_by(&Version::parse(&input)?)?;
            match format {
                OutputFormat::Text => println!("{}", satisfied),
                OutputFormat::Json => println!("{}", json!({ "satisfied": satisfied })),
            }
            Ok(if satisfied {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::SelfTest => {
            let report = selftest::run();
            match format {
                OutputFormat::Text => {
                    for check in &report.checks {
                        let status = if check.passed { "ok" } else { "FAILED" };
                        match &check.detail {
                            Some(detail) => println!("{} ... {}: {}", check.name, status, detail),
                            None => println!("{} ... {}", check.name, status),
                        }
                    }
                    println!("{} passed; {} failed", report.passed(), report.failed());
                }
                OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
            }
            Ok(if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
