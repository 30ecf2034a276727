//! Indexing structures built once from a static corpus: the primary
//! inverted index and its champion-list ("high/low") derivative.

pub mod high_low;
pub mod inverted;

pub use high_low::{build_high_low_index, ChampionEntry, HighLowIndex};
pub use inverted::{build_inverted_index, InvertedIndex};
