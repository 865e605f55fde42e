use std::process::ExitCode;
use tsurf::commands::Cli;
use tsurf::libs::logging;
use tsurf::msg_error;

fn main() -> ExitCode {
    logging::init();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
