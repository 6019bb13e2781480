//! Inverted index over generated text: word -> files containing it.
//!
//! A word is a maximal run of ASCII alphanumeric bytes, lowercased. Every
//! other byte separates words, non-ASCII bytes included.

use crate::error::{GenError, Result};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub const DEFAULT_BLOCK_SIZE: usize = 4 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct IndexOptions {
    /// Bytes read per block (sequential) or per range (parallel).
    pub block_size: usize,
    /// Index files and byte ranges on the rayon pool.
    pub parallel: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            parallel: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl InvertedIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn files_for(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    pub fn insert(&mut self, word: String, file: &str) {
        let files = self.entries.entry(word).or_default();
        if !files.contains(file) {
            files.insert(file.to_owned());
        }
    }

    pub fn merge(&mut self, other: InvertedIndex) {
        for (word, files) in other.entries {
            self.entries.entry(word).or_default().extend(files);
        }
    }

    /// One line per word: `word\tfile1 file2 ...`, both sorted.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for (word, files) in &self.entries {
            let joined = files.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
            writeln!(out, "{word}\t{joined}")?;
        }
        Ok(())
    }
}

/// Result of [`build_index`].
#[derive(Debug, Default)]
pub struct IndexBuild {
    pub index: InvertedIndex,
    pub indexed: Vec<PathBuf>,
    /// Inputs that could not be opened.
    pub skipped: Vec<PathBuf>,
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Adds every word of `bytes` to `index` under `file`.
pub fn index_bytes(bytes: &[u8], file: &str, index: &mut InvertedIndex) {
    let distinct: HashSet<&[u8]> = bytes
        .split(|b| !is_word_byte(*b))
        .filter(|w| !w.is_empty())
        .collect();
    for raw in distinct {
        // word bytes are ASCII
        let word: String = raw.iter().map(|b| b.to_ascii_lowercase() as char).collect();
        index.insert(word, file);
    }
}

/// Reads `reader` in blocks, carrying a trailing partial word into the next
/// block so no word is split.
pub fn index_stream<R: Read>(
    reader: &mut R,
    file: &str,
    block_size: usize,
) -> Result<InvertedIndex> {
    let mut index = InvertedIndex::default();
    let mut buf = vec![0u8; block_size.max(1)];
    let mut carry: Vec<u8> = Vec::new();
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        carry.extend_from_slice(&buf[..n]);
        // no separator yet: the whole carry is one unfinished word
        if let Some(last_sep) = carry.iter().rposition(|b| !is_word_byte(*b)) {
            index_bytes(&carry[..=last_sep], file, &mut index);
            carry.drain(..=last_sep);
        }
    }
    if !carry.is_empty() {
        index_bytes(&carry, file, &mut index);
    }
    Ok(index)
}

/// Moves `pos` forward over word bytes, stopping at `limit`.
fn advance_past_word<R: Read + Seek>(r: &mut R, mut pos: u64, limit: u64) -> Result<u64> {
    r.seek(SeekFrom::Start(pos))?;
    let mut byte = [0u8; 1];
    while pos < limit {
        if r.read(&mut byte)? == 0 || !is_word_byte(byte[0]) {
            break;
        }
        pos += 1;
    }
    Ok(pos)
}

/// Splits the file into `block_size` ranges and indexes them in parallel.
///
/// A word crossing a range boundary belongs to the earlier range: that range
/// is extended to the end of the word and the later one starts after it.
pub fn index_ranges(path: &Path, file: &str, block_size: usize) -> Result<InvertedIndex> {
    let size = std::fs::metadata(path)?.len();
    let block = block_size.max(1) as u64;
    let ranges = size.div_ceil(block);
    debug!(file, size, ranges, "indexing ranges");

    let partials = (0..ranges)
        .into_par_iter()
        .map(|i| -> Result<InvertedIndex> {
            let mut r = BufReader::new(File::open(path)?);
            let mut start = i * block;
            let mut end = (start + block).min(size);
            if i != 0 {
                start = advance_past_word(&mut r, start, end)?;
            }
            if i + 1 != ranges {
                end = advance_past_word(&mut r, end, size)?;
            }
            let mut index = InvertedIndex::default();
            if start < end {
                r.seek(SeekFrom::Start(start))?;
                let mut data = Vec::with_capacity((end - start) as usize);
                r.by_ref().take(end - start).read_to_end(&mut data)?;
                index_bytes(&data, file, &mut index);
            }
            Ok(index)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut index = InvertedIndex::default();
    for p in partials {
        index.merge(p);
    }
    Ok(index)
}

fn index_file(path: &Path, opts: &IndexOptions) -> Result<Option<InvertedIndex>> {
    let label = path.display().to_string();
    let mut f = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!(file = %label, error = %e, "skipping unreadable input");
            return Ok(None);
        }
    };
    let index = if opts.parallel {
        drop(f);
        index_ranges(path, &label, opts.block_size)?
    } else {
        index_stream(&mut f, &label, opts.block_size)?
    };
    debug!(file = %label, words = index.len(), "indexed file");
    Ok(Some(index))
}

/// Files named directly are taken as-is; directories are walked for regular
/// files, in sorted order.
fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in inputs {
        if !root.is_dir() {
            files.push(root.clone());
            continue;
        }
        let mut found = Vec::new();
        for e in WalkDir::new(root).follow_links(false) {
            let e = e.map_err(|e| GenError::Walk(e.to_string()))?;
            if e.file_type().is_file() {
                found.push(e.path().to_path_buf());
            }
        }
        found.sort();
        files.extend(found);
    }
    Ok(files)
}

/// Builds one index over all inputs.
pub fn build_index(inputs: &[PathBuf], opts: &IndexOptions) -> Result<IndexBuild> {
    let files = expand_inputs(inputs)?;
    let per_file: Vec<(PathBuf, Option<InvertedIndex>)> = if opts.parallel {
        files
            .par_iter()
            .map(|p| index_file(p, opts).map(|ix| (p.clone(), ix)))
            .collect::<Result<Vec<_>>>()?
    } else {
        files
            .iter()
            .map(|p| index_file(p, opts).map(|ix| (p.clone(), ix)))
            .collect::<Result<Vec<_>>>()?
    };

    let mut build = IndexBuild::default();
    for (path, ix) in per_file {
        match ix {
            Some(ix) => {
                build.index.merge(ix);
                build.indexed.push(path);
            }
            None => build.skipped.push(path),
        }
    }
    info!(
        files = build.indexed.len(),
        skipped = build.skipped.len(),
        words = build.index.len(),
        "index built"
    );
    Ok(build)
}

/// Writes `index` to `out`, replacing any existing file.
pub fn write_index(index: &InvertedIndex, out: &Path) -> Result<()> {
    let mut w = BufWriter::new(File::create(out)?);
    index.write_to(&mut w)?;
    w.flush()?;
    info!(path = %out.display(), words = index.len(), "index written");
    Ok(())
}
