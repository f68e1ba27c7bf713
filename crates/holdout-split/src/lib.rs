//! Randomized train/validation/test splitting of in-memory tables.
//!
//! Pure data manipulation, zero I/O. Rows are drawn through a uniformly
//! random permutation and sliced contiguously by validated proportions.
//! Seeded splits use a per-call `ChaCha8Rng`; any caller-owned generator can
//! be passed instead.

mod config;
mod error;
mod proportions;
mod result;
mod split;
mod table;

pub use config::SplitConfig;
pub use error::SplitError;
pub use proportions::{SplitProportions, SplitSizes};
pub use result::{DatasetSplit, SplitIndices};
pub use split::{split_dataset, split_indices};
pub use table::Table;
