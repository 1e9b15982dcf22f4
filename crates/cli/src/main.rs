// rosterlink CLI - clean and link document registry and roster exports

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rosterlink_cli::exit_codes::EXIT_SUCCESS;
use rosterlink_cli::run::{load_config, run_pipeline};
use rosterlink_cli::CliError;

#[derive(Parser)]
#[command(name = "rlink")]
#[command(about = "Clean two spreadsheet exports and link documents to reviewers")]
#[command(version)]
#[command(after_help = "\
Examples:
  rlink data/raw data/processed
  rlink data/raw data/processed --config pipeline.toml")]
struct Cli {
    /// Directory containing the registry and roster exports
    input_dir: PathBuf,

    /// Directory for the cleaned and linked CSV files (created if needed)
    output_dir: PathBuf,

    /// TOML pipeline config; defaults to the built-in export layout
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref())
        .and_then(|config| run_pipeline(&config, &cli.input_dir, &cli.output_dir));

    match result {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}
