use std::process::ExitCode;

use gemfall_game::cli::{self, CliError, COIN_MOTION_USAGE};
use gemfall_game::scenario::Scenario;

fn main() -> ExitCode {
    let args = match cli::parse_coin_motion(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(CliError::Help) => {
            println!("{COIN_MOTION_USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{COIN_MOTION_USAGE}");
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    let result = gemfall_game::bootstrap(args.config.as_deref()).and_then(|config| {
        let scenario = Scenario::coin_motion(args.mode, &config);
        gemfall_game::run(scenario, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
