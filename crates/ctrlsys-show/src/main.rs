//! ctrlsys-show - ControlSystem configuration checker
//!
//! Entry point for the ctrlsys-show command.

use clap::Parser;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ctrlsys_show::{CtrlSysError, CtrlSysSettings};

/// Validate a ControlSystem switch configuration and print its ports
#[derive(Parser, Debug)]
#[command(name = "ctrlsys-show")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// XML configuration document (defaults to the `input.path` setting)
    config_file: Option<PathBuf>,

    /// TOML settings file
    #[arg(short = 's', long)]
    settings: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,

    /// Reject repeated port IDs in <Ports> or <defVlans>
    #[arg(long)]
    reject_duplicates: bool,

    /// Reject port IDs and VLAN numbers that are not plain integers
    #[arg(long)]
    strict_integers: bool,
}

/// Initializes tracing on stderr so stdout carries only the report
fn init_logging(level: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
}

fn load_settings(args: &Args) -> Result<CtrlSysSettings, CtrlSysError> {
    let mut settings = match &args.settings {
        Some(path) => CtrlSysSettings::load_or_default(path)?,
        None => CtrlSysSettings::default(),
    };

    if let Some(path) = &args.config_file {
        settings.input.path = path.clone();
    }
    if args.reject_duplicates {
        settings.validation.reject_duplicate_ids = true;
    }
    if args.strict_integers {
        settings.validation.strict_integers = true;
    }

    settings.validate()?;
    Ok(settings)
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_logging(&args.log_level) {
        // Only fails when a global subscriber is already installed.
        debug!(error = %err, "keeping existing tracing subscriber");
    }

    let result = load_settings(&args).and_then(|settings| {
        debug!(path = %settings.input.path.display(), "checking configuration");
        let stdout = io::stdout();
        ctrlsys_show::run(&settings.input.path, &settings, &mut stdout.lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "configuration check failed");
            match &err {
                CtrlSysError::Schema(_) => eprintln!("{err}"),
                _ => eprintln!("Error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
