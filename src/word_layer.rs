//! Builds the selectable hit-regions laid over the page image

use crate::geometry::{PixelRect, Word};

/// Display inset keeping a 1px border inside the nominal word box, so that
/// boxes sharing an edge don't merge visually.
pub const REGION_INSET: f64 = 2.0;

/// The on-screen, highlightable representation of one word
#[derive(Clone, Debug, PartialEq)]
pub struct WordRegion {
    /// Index of the bound word in the page's word list
    pub word_index: usize,
    /// Where the region is drawn (word box inset by `REGION_INSET`)
    pub display: PixelRect,
    pub selected: bool,
}

/// One region per word, in input order. Negative sizes are accepted and
/// produce degenerate regions that render as nothing.
pub fn build(words: &[Word]) -> Vec<WordRegion> {
    words
        .iter()
        .enumerate()
        .map(|(word_index, word)| WordRegion {
            word_index,
            display: word.bounds().inset(REGION_INSET),
            selected: false,
        })
        .collect()
}
