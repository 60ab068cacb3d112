use std::io;
use std::process::ExitCode;

use clap::Parser;

use srs_cli::commands::{self, Cli};
use srs_cli::config::Config;
use srs_cli::logging;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config);

    let cli = Cli::parse();

    match commands::run(&cli, io::stdin().lock()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(commands::exit_code(&err) as u8)
        }
    }
}
