use crate::domain::RunReport;
use crate::error::{GenError, Result};
use crate::generate::block::BlockLayout;
use crate::generate::writer::generate_file;
use crate::progress::Progress;
use crate::vocab::{COMMON_WORDS, TOPICS, unique_word_count};
use std::path::Path;
use tracing::info;

pub const DEFAULT_SIZE_GB: i64 = 4;

/// Removes `_` digit separators. Each `_` must sit between two digits.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let is_digit = |b: Option<u8>| b.is_some_and(|c| c.is_ascii_digit());
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !is_digit(before) || !is_digit(after) {
            return None;
        }
    }
    Some(s.replace('_', ""))
}

/// Parses the optional size argument (GiB). Missing means [`DEFAULT_SIZE_GB`].
///
/// Accepts surrounding whitespace, a leading sign and `_` between digits
/// (`1_000`).
pub fn parse_size_arg(arg: Option<&str>) -> Result<i64> {
    let Some(raw) = arg else {
        return Ok(DEFAULT_SIZE_GB);
    };
    strip_digit_separators(raw.trim())
        .and_then(|digits| digits.parse::<i64>().ok())
        .ok_or_else(|| GenError::InvalidSize(raw.to_string()))
}

/// `text_clean_{index}_{gb}GB.txt`, with `index` starting at 1.
pub fn output_file_name(index: usize, size_gb: i64) -> String {
    format!("text_clean_{index}_{size_gb}GB.txt")
}

/// Generates one file per topic in `out_dir`, in topic order.
pub fn run(out_dir: &Path, size_gb: i64, progress: &mut dyn Progress) -> Result<RunReport> {
    let layout = BlockLayout::default();
    let mut files = Vec::with_capacity(TOPICS.len());
    for (i, topic) in TOPICS.iter().enumerate() {
        let path = out_dir.join(output_file_name(i + 1, size_gb));
        info!(topic = topic.name, path = %path.display(), "starting file");
        files.push(generate_file(
            &path,
            COMMON_WORDS,
            topic.words,
            size_gb,
            &layout,
            progress,
        )?);
    }
    Ok(RunReport {
        files,
        unique_words: unique_word_count(COMMON_WORDS, &TOPICS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;

    #[test]
    fn default_size_equals_four() {
        assert_eq!(parse_size_arg(None).unwrap(), 4);
        assert_eq!(parse_size_arg(None).unwrap(), parse_size_arg(Some("4")).unwrap());
    }

    #[test]
    fn parses_signed_and_padded_integers() {
        assert_eq!(parse_size_arg(Some(" 7 ")).unwrap(), 7);
        assert_eq!(parse_size_arg(Some("+2")).unwrap(), 2);
        assert_eq!(parse_size_arg(Some("-3")).unwrap(), -3);
        assert_eq!(parse_size_arg(Some("0")).unwrap(), 0);
    }

    #[test]
    fn accepts_underscore_digit_separators() {
        assert_eq!(parse_size_arg(Some("1_0")).unwrap(), 10);
        assert_eq!(parse_size_arg(Some("-1_000")).unwrap(), -1000);
        assert_eq!(parse_size_arg(Some(" +2_5 ")).unwrap(), 25);
    }

    #[test]
    fn rejects_non_integers() {
        for bad in ["abc", "", "1.5", "4GB", "1e3", "_1", "1_", "1__0", "-_1", "-x"] {
            let err = parse_size_arg(Some(bad)).unwrap_err();
            assert!(matches!(err, GenError::InvalidSize(ref s) if s == bad), "{bad:?}");
        }
    }

    #[test]
    fn file_names() {
        assert_eq!(output_file_name(1, 4), "text_clean_1_4GB.txt");
        assert_eq!(output_file_name(5, 0), "text_clean_5_0GB.txt");
        assert_eq!(output_file_name(2, -1), "text_clean_2_-1GB.txt");
    }

    #[test]
    fn zero_size_run_creates_five_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(dir.path(), 0, &mut NoProgress).unwrap();
        assert_eq!(report.files.len(), 5);
        assert_eq!(report.unique_words, 266);
        for (i, f) in report.files.iter().enumerate() {
            assert_eq!(f.path, dir.path().join(output_file_name(i + 1, 0)));
            assert_eq!(std::fs::metadata(&f.path).unwrap().len(), 0);
        }
        let sizes: Vec<u64> = report.files.iter().map(|f| f.block_size).collect();
        assert_eq!(sizes, vec![63300, 64550, 63400, 64600, 64600]);
    }
}
