use std::{
    io::{self, IsTerminal},
    process,
};

use clap::{CommandFactory, Parser};
#[cfg(feature = "colored-output")]
use colored::*;
use naki::{
    cli::{Args, Commands},
    commands::{CommandExecutor, DecodeOptions},
    config::AppConfig,
    error::{AppError, Result},
};
use tracing::error;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn main() {
    let args = Args::parse();
    let output_format = args.command.output_format();

    if let Err(e) = run(args) {
        match output_format {
            Some(format) if format.is_json() => {
                let error_json = serde_json::json!({
                    "status": "error",
                    "message": e.to_string(),
                });
                println!("{error_json}");
            }
            _ => {
                error!("Application error: {}", e);
                #[cfg(feature = "colored-output")]
                {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                }
                #[cfg(not(feature = "colored-output"))]
                {
                    eprintln!("Error: {}", e);
                }
            }
        }
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    init_logging(args.verbose, args.quiet, config.log_filter.as_deref())?;

    let colored = !args.no_color && io::stdout().is_terminal();
    let executor = CommandExecutor::new(config, colored);

    match args.command {
        Commands::Decode {
            file,
            lines,
            chain,
            output,
            keep_going,
            max_depth,
        } => {
            executor.decode_file(
                file.as_deref(),
                DecodeOptions {
                    lines,
                    chain,
                    output,
                    keep_going,
                    max_depth,
                },
            )?;
        }

        Commands::Variants { elements, output } => {
            executor.list_variants(elements, &output)?;
        }

        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut io::stdout());
        }

        Commands::Config { show, reset } => {
            if reset {
                let path = AppConfig::reset(args.config.as_deref())?;
                println!("✓ Configuration reset to defaults at {}", path.display());
            } else if show {
                let config = AppConfig::load(args.config.as_deref())?;
                println!("{}", config.show()?);
            } else {
                println!(
                    "Use --show to display current configuration or --reset to reset to defaults"
                );
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so decoded output on stdout stays machine readable.
fn init_logging(verbose: bool, quiet: bool, configured: Option<&str>) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(configured.unwrap_or("info")))
            .map_err(|e| AppError::Logging(e.to_string()))?
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(verbose),
        )
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
