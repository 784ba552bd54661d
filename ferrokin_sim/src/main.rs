// ferrokin_sim/src/main.rs

use std::process::ExitCode;

use clap::Parser;
use ferrokin_sim::cli::Cli;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    ferrokin_sim::init_tracing(cli.verbose);

    match ferrokin_sim::run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}
