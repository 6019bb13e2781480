use clap::Parser;
use corpusgen_core::index::DEFAULT_BLOCK_SIZE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate five large accent-free Spanish text files",
    long_about = None
)]
pub struct Cli {
    /// Size of each file in GB (integer, default 4); later values are ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub size: Vec<String>,
}

#[derive(Parser)]
#[command(
    name = "corpusgen-index",
    author,
    version,
    about = "Build an inverted index (word -> files) over text files",
    long_about = None
)]
pub struct IndexCli {
    /// Files or directories to index
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Index files and blocks in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Bytes per read block
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Output index file
    #[arg(short, long, default_value = "indice_final.txt")]
    pub out: PathBuf,
}
