use corpusgen::application;
use corpusgen::presentation::logging;
use corpusgen_core::error::GenError;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    match application::run_generate() {
        Ok(()) => ExitCode::SUCCESS,
        Err(GenError::InvalidSize(_)) => {
            println!("❌ El argumento debe ser un número entero (GB)");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
