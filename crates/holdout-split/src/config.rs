//! Configuration builder for dataset splitting.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

use crate::proportions::SplitProportions;
use crate::result::DatasetSplit;
use crate::split::split_indices;
use crate::table::Table;

/// Configuration for a train/validation/test split.
///
/// Construct via [`SplitConfig::new`] (or `Default`), then chain `with_seed`
/// if desired.
///
/// # Defaults
///
/// | Parameter     | Default              |
/// |---------------|----------------------|
/// | `proportions` | 0.80 / 0.0 / 0.20    |
/// | `seed`        | `None` (thread RNG)  |
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SplitConfig {
    proportions: SplitProportions,
    seed: Option<u64>,
}

impl SplitConfig {
    /// Create a new unseeded config with the given proportions.
    #[must_use]
    pub fn new(proportions: SplitProportions) -> Self {
        Self {
            proportions,
            seed: None,
        }
    }

    /// Set the random seed for reproducible splits.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Return the split proportions.
    #[must_use]
    pub fn proportions(&self) -> SplitProportions {
        self.proportions
    }

    /// Return the random seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Split `table` into train, validation and test tables.
    ///
    /// A seeded config draws from its own `ChaCha8Rng`, so concurrent splits
    /// never share generator state. An unseeded config uses the calling
    /// thread's generator.
    #[instrument(skip_all, fields(n_rows = table.n_rows(), seed = ?self.seed))]
    pub fn split<T: Clone>(&self, table: &Table<T>) -> DatasetSplit<T> {
        match self.seed {
            Some(seed) => self.split_with_rng(table, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.split_with_rng(table, &mut rand::thread_rng()),
        }
    }

    /// Split `table` drawing the permutation from a caller-owned generator.
    ///
    /// The configured seed is ignored; reproducibility is up to `rng`.
    pub fn split_with_rng<T: Clone, R: Rng + ?Sized>(
        &self,
        table: &Table<T>,
        rng: &mut R,
    ) -> DatasetSplit<T> {
        let indices = split_indices(table.n_rows(), &self.proportions, rng);
        let split = DatasetSplit::from_indices(table, indices);

        let sizes = split.sizes();
        info!(
            train = sizes.train,
            validation = sizes.validation,
            test = sizes.test,
            "dataset split"
        );
        split
    }
}
