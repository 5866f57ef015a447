// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Two splits happen during a training run:
//
//   1. train_test_split  — seeded shuffle, then the first
//                          ceil(n * test_size) shuffled rows
//                          become the test partition
//   2. holdout_tail      — no shuffle; the tail of the train
//                          partition is held out for per-epoch
//                          validation monitoring
//
// The shuffle uses a StdRng seeded from a u64, so the same seed
// and the same input order always give the same partition.
// No stratification by label.
//
// Reference: rand crate documentation (SeedableRng, SliceRandom)

use anyhow::{bail, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `samples` with a seeded RNG and split into (train, test).
///
/// # Arguments
/// * `samples`   - All available samples (consumed by this function)
/// * `test_size` - Fraction for the test partition, e.g. 0.2 = 20%
/// * `seed`      - RNG seed for the shuffle
pub fn train_test_split<T>(
    samples:   Vec<T>,
    test_size: f64,
    seed:      u64,
) -> Result<(Vec<T>, Vec<T>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        bail!("test_size must be in (0, 1), got {test_size}");
    }

    let total  = samples.len();
    let n_test = ((total as f64) * test_size).ceil() as usize;
    if n_test == 0 || n_test >= total {
        bail!(
            "cannot split {total} rows with test_size={test_size}: \
             train and test partitions must both be non-empty"
        );
    }

    let mut order: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    // Move items out by shuffled index without cloning
    let mut slots: Vec<Option<T>> = samples.into_iter().map(Some).collect();
    let mut take = |i: &usize| slots[*i].take();

    let test:  Vec<T> = order[..n_test].iter().filter_map(&mut take).collect();
    let train: Vec<T> = order[n_test..].iter().filter_map(&mut take).collect();

    tracing::debug!(
        "Train/test split: {} train, {} test (seed={})",
        train.len(),
        test.len(),
        seed
    );

    Ok((train, test))
}

/// Hold out the last `fraction` of `samples` for validation.
///
/// Split point is floor(n * (1 - fraction)); everything from there
/// to the end is the validation set. Order is preserved.
pub fn holdout_tail<T>(mut samples: Vec<T>, fraction: f64) -> Result<(Vec<T>, Vec<T>)> {
    if !(0.0..1.0).contains(&fraction) {
        bail!("validation fraction must be in [0, 1), got {fraction}");
    }

    let split_at = ((samples.len() as f64) * (1.0 - fraction)).floor() as usize;
    if split_at == 0 {
        bail!(
            "validation split {fraction} leaves no training rows out of {}",
            samples.len()
        );
    }

    let val = samples.split_off(split_at);
    Ok((samples, val))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = train_test_split(items, 0.2, 42).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
    }

    #[test]
    fn test_test_size_rounds_up() {
        let items: Vec<usize> = (0..11).collect();
        let (train, test)     = train_test_split(items, 0.2, 42).unwrap();
        // ceil(11 * 0.2) = 3
        assert_eq!(test.len(),  3);
        assert_eq!(train.len(), 8);
    }

    #[test]
    fn test_same_seed_same_partition() {
        let a = train_test_split((0..100).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        let b = train_test_split((0..100).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_partition() {
        let a = train_test_split((0..100).collect::<Vec<usize>>(), 0.2, 42).unwrap();
        let b = train_test_split((0..100).collect::<Vec<usize>>(), 0.2, 7).unwrap();
        assert_ne!(a.1, b.1);
    }

    #[test]
    fn test_all_items_preserved_once() {
        let (mut train, test) =
            train_test_split((0..50).collect::<Vec<usize>>(), 0.3, 1).unwrap();
        train.extend(test);
        train.sort_unstable();
        assert_eq!(train, (0..50).collect::<Vec<usize>>());
    }

    #[test]
    fn test_too_few_rows_is_an_error() {
        assert!(train_test_split(vec![1usize], 0.2, 42).is_err());
        assert!(train_test_split(Vec::<usize>::new(), 0.2, 42).is_err());
    }

    #[test]
    fn test_holdout_takes_the_tail() {
        let items: Vec<usize> = (0..80).collect();
        let (fit, val) = holdout_tail(items, 0.2).unwrap();
        assert_eq!(fit.len(), 64);
        assert_eq!(val, (64..80).collect::<Vec<usize>>());
    }

    #[test]
    fn test_holdout_zero_keeps_everything() {
        let (fit, val) = holdout_tail((0..10).collect::<Vec<usize>>(), 0.0).unwrap();
        assert_eq!(fit.len(), 10);
        assert!(val.is_empty());
    }

    #[test]
    fn test_holdout_rejects_empty_training_part() {
        assert!(holdout_tail(vec![1usize], 0.5).is_err());
    }
}
