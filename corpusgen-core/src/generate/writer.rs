use crate::domain::FileReport;
use crate::error::Result;
use crate::generate::block::{BlockLayout, build_block};
use crate::progress::Progress;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub const GIB: u64 = 1024 * 1024 * 1024;

/// Write adapter that counts bytes written
struct CountingWriter<'a, W: Write> {
    inner: &'a mut W,
    n: u64,
}
impl<'a, W: Write> CountingWriter<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self { inner, n: 0 }
    }
}
impl<'a, W: Write> Write for CountingWriter<'a, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let k = self.inner.write(buf)?;
        self.n += k as u64;
        Ok(k)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Byte threshold for a size in GiB. Zero and negative sizes map to 0.
pub fn target_bytes(size_gb: i64) -> u64 {
    if size_gb <= 0 {
        0
    } else {
        (size_gb as u64).saturating_mul(GIB)
    }
}

/// Writes `block` into `out` until at least `target` bytes went through.
///
/// After every write whose running total sits less than one block past a
/// multiple of `milestone`, `on_milestone` gets the running total. Returns
/// the number of bytes written, which is always a multiple of the block
/// length and lies in `[target, target + block.len())` (or is 0 when
/// `target` is 0).
pub fn fill_writer<W: Write>(
    out: &mut W,
    block: &[u8],
    target: u64,
    milestone: u64,
    mut on_milestone: impl FnMut(u64),
) -> Result<u64> {
    if block.is_empty() && target > 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "cannot reach a non-zero target with an empty block",
        )
        .into());
    }
    let block_size = block.len() as u64;
    let milestone = milestone.max(1);

    let mut cw = CountingWriter::new(out);
    while cw.n < target {
        cw.write_all(block)?;
        if cw.n % milestone < block_size {
            on_milestone(cw.n);
        }
    }
    cw.flush()?;
    Ok(cw.n)
}

/// Generates one output file of at least `size_gb` GiB.
///
/// The file is created (or truncated) at `path` and closed before this
/// returns, on error paths too.
pub fn generate_file(
    path: &Path,
    common: &[&str],
    extra: &[&str],
    size_gb: i64,
    layout: &BlockLayout,
    progress: &mut dyn Progress,
) -> Result<FileReport> {
    let block = build_block(common, extra, layout);
    let target = target_bytes(size_gb);
    debug!(path = %path.display(), target, block_len = block.len(), "generating file");

    let written = {
        let mut f = File::create(path)?;
        fill_writer(&mut f, &block, target, GIB, |n| progress.milestone(path, n))?
    };

    let block_size = block.len() as u64;
    let report = FileReport {
        path: path.to_path_buf(),
        block_size,
        blocks: if block_size == 0 { 0 } else { written / block_size },
        bytes_written: written,
    };
    info!(path = %path.display(), bytes = written, blocks = report.blocks, "file generated");
    progress.finished(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{COMMON_WORDS, TOPICS};

    #[derive(Default)]
    struct Recorder {
        milestones: Vec<u64>,
        finished: Vec<FileReport>,
    }

    impl Progress for Recorder {
        fn milestone(&mut self, _path: &Path, written: u64) {
            self.milestones.push(written);
        }
        fn finished(&mut self, report: &FileReport) {
            self.finished.push(report.clone());
        }
    }

    #[test]
    fn target_bytes_clamps_non_positive() {
        assert_eq!(target_bytes(0), 0);
        assert_eq!(target_bytes(-7), 0);
        assert_eq!(target_bytes(2), 2 * GIB);
    }

    #[test]
    fn written_within_one_block_of_target() {
        let block = b"abcdefg".to_vec();
        for target in [1u64, 6, 7, 8, 100, 1000, 4097] {
            let mut out = Vec::new();
            let n = fill_writer(&mut out, &block, target, 1 << 20, |_| {}).unwrap();
            assert_eq!(n, out.len() as u64);
            assert!(n >= target && n < target + block.len() as u64, "target {target}: {n}");
            assert_eq!(n % block.len() as u64, 0);
        }
    }

    #[test]
    fn zero_target_writes_nothing() {
        let mut out = Vec::new();
        let mut hits = 0;
        let n = fill_writer(&mut out, b"xyz", 0, 10, |_| hits += 1).unwrap();
        assert_eq!(n, 0);
        assert!(out.is_empty());
        assert_eq!(hits, 0);
    }

    #[test]
    fn empty_block_is_rejected() {
        let mut out = Vec::new();
        assert!(fill_writer(&mut out, b"", 10, 10, |_| {}).is_err());
        assert_eq!(fill_writer(&mut out, b"", 0, 10, |_| {}).unwrap(), 0);
    }

    #[test]
    fn milestones_fire_once_per_boundary() {
        // block of 3 bytes, milestone every 10 bytes, target 31
        let mut out = Vec::new();
        let mut seen = Vec::new();
        let n = fill_writer(&mut out, b"abc", 31, 10, |w| seen.push(w)).unwrap();
        assert_eq!(n, 33);
        assert_eq!(seen, vec![12, 21, 30]);
    }

    #[test]
    fn builtin_block_repeats_exactly() {
        let block = build_block(COMMON_WORDS, TOPICS[0].words, &BlockLayout::default());
        let mut out = Vec::new();
        let target = 3 * block.len() as u64 - 1;
        fill_writer(&mut out, &block, target, GIB, |_| {}).unwrap();
        assert_eq!(out.len(), 3 * block.len());
        assert_eq!(&out[..block.len()], &block[..]);
        assert_eq!(&out[2 * block.len()..], &block[..]);
    }

    #[test]
    fn zero_gb_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text_clean_1_0GB.txt");
        let mut rec = Recorder::default();
        let report = generate_file(
            &path,
            COMMON_WORDS,
            TOPICS[0].words,
            0,
            &BlockLayout::default(),
            &mut rec,
        )
        .unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
        assert_eq!(report.bytes_written, 0);
        assert_eq!(report.blocks, 0);
        assert_eq!(report.block_size, 63300);
        assert!(rec.milestones.is_empty());
        assert_eq!(rec.finished, vec![report]);
    }

    #[test]
    fn negative_gb_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neg.txt");
        let report = generate_file(
            &path,
            &["a"],
            &["b"],
            -3,
            &BlockLayout::default(),
            &mut crate::progress::NoProgress,
        )
        .unwrap();
        assert_eq!(report.bytes_written, 0);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.txt");
        std::fs::write(&path, b"stale contents").unwrap();
        generate_file(
            &path,
            &["a"],
            &[],
            0,
            &BlockLayout::default(),
            &mut crate::progress::NoProgress,
        )
        .unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("x.txt");
        let err = generate_file(
            &path,
            &["a"],
            &[],
            1,
            &BlockLayout::default(),
            &mut crate::progress::NoProgress,
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::GenError::Io(_)));
    }
}
