use crate::text::normalize::clean_text;
use tracing::debug;

const TEMPLATE_PREFIX: &str = "En este documento se abordan temas como ";
const TEMPLATE_SUFFIX: &str = ".\n";

/// How many times the sentence and the paragraph are repeated in a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockLayout {
    /// Template sentences per paragraph.
    pub paragraph_repeats: usize,
    /// Cleaned paragraphs per block.
    pub block_repeats: usize,
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            paragraph_repeats: 5,
            block_repeats: 10,
        }
    }
}

/// Builds the fixed write block for one vocabulary pair.
pub fn build_block(common: &[&str], extra: &[&str], layout: &BlockLayout) -> Vec<u8> {
    let sentence = common
        .iter()
        .chain(extra.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let line = format!("{TEMPLATE_PREFIX}{sentence}{TEMPLATE_SUFFIX}");
    let paragraph = clean_text(&line.repeat(layout.paragraph_repeats));
    let block = paragraph.repeat(layout.block_repeats).into_bytes();
    debug!(
        words = common.len() + extra.len(),
        paragraph_len = paragraph.len(),
        block_len = block.len(),
        "built block"
    );
    block
}
