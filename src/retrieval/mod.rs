//! Inexact (approximate top-k) retrieval over the high/low champion index.

pub mod inexact;

pub use inexact::filter_candidates;
