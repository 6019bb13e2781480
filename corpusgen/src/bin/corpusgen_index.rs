use corpusgen::application;
use corpusgen::presentation::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    match application::run_index() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
