//! Study plan extractor CLI.

use clap::Parser;
use curriculum_cli::logging::init_logging;

use curriculum_cli::cli::Cli;
use curriculum_cli::commands::{run_extract, write_output};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = run_extract(&cli).and_then(|curriculum| write_output(&cli, &curriculum));
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
