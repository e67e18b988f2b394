mod summary;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::{Logger, LoggerHandle};
use govdsl_core::{BuildError, BuildOptions};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Governance policy language toolchain.
#[derive(Parser)]
#[command(
    name = "govdsl",
    version,
    about = "Governance policy language toolchain"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log build progress to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the policy model from a syntax tree and report on it
    Check {
        /// Path to the JSON syntax tree
        file: PathBuf,
        /// Path to a TOML build options file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose);

    match cli.command {
        Commands::Check { file, config } => {
            cmd_check(&file, config.as_deref(), cli.output, cli.quiet);
        }
    }
}

/// Start the stderr logger. `RUST_LOG` overrides the level chosen by `-v`.
fn init_logging(verbose: u8) -> Option<LoggerHandle> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    match Logger::try_with_env_or_str(level).and_then(|l| l.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    }
}

fn cmd_check(file: &Path, config: Option<&Path>, output: OutputFormat, quiet: bool) {
    let options = match config {
        Some(path) => match govdsl_core::load_options(path) {
            Ok(o) => {
                log::debug!("build options from {}: {:?}", path.display(), o);
                o
            }
            Err(e) => exit_with_build_error(&e, output, quiet),
        },
        None => BuildOptions::default(),
    };

    let tree = match govdsl_core::load_tree(file) {
        Ok(t) => t,
        Err(e) => exit_with_build_error(&e, output, quiet),
    };

    match govdsl_core::build_policy(&tree, options) {
        Ok(outcome) => {
            log::info!(
                "built policy for project '{}' from {} ({} rules, {} warnings)",
                outcome.policy.project.name,
                file.display(),
                outcome.policy.rules.len(),
                outcome.warnings.len()
            );
            if !quiet {
                summary::print(&outcome, output);
            }
        }
        Err(e) => exit_with_build_error(&e, output, quiet),
    }
}

fn exit_with_build_error(e: &BuildError, output: OutputFormat, quiet: bool) -> ! {
    match output {
        OutputFormat::Json => {
            let err_json = serde_json::to_string_pretty(&e.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", e));
            eprintln!("{}", err_json);
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("error: {}", e);
            }
        }
    }
    process::exit(1);
}
