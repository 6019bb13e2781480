#![forbid(unsafe_code)]

pub mod error;
pub mod domain;
pub mod progress;
pub mod run;
pub mod vocab;

pub mod text {
    pub mod normalize;
}

pub mod generate {
    pub mod block;
    pub mod writer;
}

pub mod index;

// Re-exports: stable API surface
pub use domain::{FileReport, RunReport};
pub use generate::block::{BlockLayout, build_block};
pub use generate::writer::{GIB, fill_writer, generate_file};
pub use index::{IndexBuild, IndexOptions, InvertedIndex, build_index, write_index};
pub use progress::{NoProgress, Progress};
pub use run::{DEFAULT_SIZE_GB, output_file_name, parse_size_arg, run};
pub use text::normalize::clean_text;
