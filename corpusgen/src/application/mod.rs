pub mod handlers;

use crate::presentation::cli::{Cli, IndexCli};
use clap::Parser;
use clap::error::ErrorKind;
use corpusgen_core::error::{GenError, Result};
use corpusgen_core::index::IndexOptions;

pub fn run_generate() -> Result<()> {
    // Anything clap rejects is a malformed size, except help/version output.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            kind => return Err(GenError::InvalidSize(format!("{kind:?}"))),
        },
    };
    handlers::handle_generate(cli.size.into_iter().next())
}

pub fn run_index() -> Result<()> {
    let cli = IndexCli::parse();
    let opts = IndexOptions {
        block_size: cli.block_size,
        parallel: cli.parallel,
    };
    handlers::handle_index(cli.inputs, cli.out, opts)
}
