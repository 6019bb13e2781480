use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub block_size: u64,
    pub blocks: u64,
    pub bytes_written: u64,
}

impl FileReport {
    /// Size in GiB, for display.
    pub fn gib(&self) -> f64 {
        self.bytes_written as f64 / crate::GIB as f64
    }
}

#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub unique_words: usize,
}
