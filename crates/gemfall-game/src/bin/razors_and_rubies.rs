use std::process::ExitCode;

use gemfall_game::cli::{self, CliError, RAZORS_AND_RUBIES_USAGE};
use gemfall_game::scenario::Scenario;

fn main() -> ExitCode {
    let args = match cli::parse_razors_and_rubies(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(CliError::Help) => {
            println!("{RAZORS_AND_RUBIES_USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{RAZORS_AND_RUBIES_USAGE}");
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    let result = gemfall_game::bootstrap(args.config.as_deref()).and_then(|config| {
        gemfall_game::run(Scenario::razors_and_rubies(&config), &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
