//! Random permutation and contiguous slicing into train/validation/test.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::proportions::SplitProportions;
use crate::result::{DatasetSplit, SplitIndices};
use crate::table::Table;

/// Draw a uniformly random permutation of `0..n_rows` and slice it into
/// train, validation and test positions.
///
/// Train takes the first [`SplitProportions::sizes`] `train` positions,
/// validation the next `validation`, and test the rest.
pub fn split_indices<R: Rng + ?Sized>(
    n_rows: usize,
    proportions: &SplitProportions,
    rng: &mut R,
) -> SplitIndices {
    let mut order: Vec<usize> = (0..n_rows).collect();
    order.shuffle(rng);

    let sizes = proportions.sizes(n_rows);
    let validation_end = sizes.train + sizes.validation;
    debug!(
        train_end = sizes.train,
        validation_end, n_rows, "split boundaries"
    );

    let test = order.split_off(validation_end);
    let validation = order.split_off(sizes.train);
    SplitIndices {
        train: order,
        validation,
        test,
    }
}

/// Randomly split `table` into train, validation and test tables.
///
/// With `seed`, the split is reproducible: the same seed and table always
/// give the same three tables, row order included. Without one, the thread's
/// default generator is used.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SplitError::InvalidProportion`] | A proportion is negative, NaN, or infinite |
/// | [`SplitError::ProportionSum`] | The proportions do not sum to 1.0 at 10 decimals |
///
/// Validation happens before any row is drawn.
pub fn split_dataset<T: Clone>(
    table: &Table<T>,
    train_size: f64,
    validation_size: f64,
    test_size: f64,
    seed: Option<u64>,
) -> Result<DatasetSplit<T>, SplitError> {
    let proportions = SplitProportions::new(train_size, validation_size, test_size)?;
    let config = SplitConfig::new(proportions);
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    Ok(config.split(table))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Proportions in whole percent, so they sum to exactly 100.
    fn proportions() -> impl Strategy<Value = SplitProportions> {
        (0..=100u32)
            .prop_flat_map(|train| (Just(train), 0..=(100 - train)))
            .prop_map(|(train, validation)| {
                let test = 100 - train - validation;
                SplitProportions::new(
                    f64::from(train) / 100.0,
                    f64::from(validation) / 100.0,
                    f64::from(test) / 100.0,
                )
                .unwrap()
            })
    }

    proptest! {
        #[test]
        fn indices_are_a_permutation(
            n_rows in 0..300usize,
            p in proportions(),
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let indices = split_indices(n_rows, &p, &mut rng);
            prop_assert_eq!(indices.sizes().total(), n_rows);

            let mut all: Vec<usize> = indices
                .train
                .iter()
                .chain(&indices.validation)
                .chain(&indices.test)
                .copied()
                .collect();
            all.sort_unstable();
            prop_assert_eq!(all, (0..n_rows).collect::<Vec<_>>());
        }

        #[test]
        fn sizes_within_one_row_of_nominal(
            n_rows in 0..300usize,
            p in proportions(),
        ) {
            let sizes = p.sizes(n_rows);
            let nominal = n_rows as f64 * p.train();
            prop_assert!((sizes.train as f64 - nominal).abs() <= 1.0);
        }
    }
}
