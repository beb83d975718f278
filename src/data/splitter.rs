// ============================================================
// Layer 4 — Train/Validation/Test Splitter
// ============================================================
// Shuffles records once with a seeded RNG, then cuts the
// shuffled vector into three contiguous index ranges:
//
//   [0 .. train)            train = floor(N * 0.8)
//   [train .. train + val)  val   = floor(N * 0.1)
//   [train + val .. N)      test  = everything left
//
// Same input + same seed → same partitions, every run.
// Small N can leave val or test empty (N = 5 → 4/0/1); that is
// accepted as-is.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom on a
// StdRng seeded from a u64.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Default RNG seed for reproducible splits.
pub const DEFAULT_SEED: u64 = 42;

/// Fractions of the dataset assigned to train and validation.
/// Test receives the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatios {
    pub train: f64,
    pub val:   f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self { train: 0.8, val: 0.1 }
    }
}

/// The three disjoint partitions of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitions<T> {
    pub train: Vec<T>,
    pub val:   Vec<T>,
    pub test:  Vec<T>,
}

impl<T> Partitions<T> {
    pub fn total(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }
}

/// Shuffle `samples` with `seed` and split into (train, val, test).
///
/// # Example
/// ```ignore
/// let parts = split_train_val_test((0..10).collect(), 42, SplitRatios::default());
/// // 8 / 1 / 1
/// ```
pub fn split_train_val_test<T>(
    mut samples: Vec<T>,
    seed:        u64,
    ratios:      SplitRatios,
) -> Partitions<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total     = samples.len();
    // `as usize` truncates toward zero, i.e. floor for non-negative values
    let train_len = ((total as f64) * ratios.train) as usize;
    let val_len   = ((total as f64) * ratios.val) as usize;

    // Clamp to valid range so odd ratios can't panic split_off
    let train_end = train_len.min(total);
    let val_end   = (train_end + val_len).min(total);

    // split_off(n) removes [n..] and returns it, leaving [0..n]
    let test  = samples.split_off(val_end);
    let val   = samples.split_off(train_end);
    let train = samples;

    tracing::debug!(
        "Dataset split: {} train, {} validation, {} test",
        train.len(),
        val.len(),
        test.len(),
    );

    Partitions { train, val, test }
}

/// Percentage of `part` in `total`, 0.0 for an empty dataset.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ten_items_split_8_1_1() {
        let items: Vec<usize> = (0..10).collect();
        let parts = split_train_val_test(items, DEFAULT_SEED, SplitRatios::default());
        assert_eq!(parts.train.len(), 8);
        assert_eq!(parts.val.len(),   1);
        assert_eq!(parts.test.len(),  1);
    }

    #[test]
    fn test_floor_sizes() {
        // 1234 * 0.8 = 987.2, 1234 * 0.1 = 123.4
        let items: Vec<usize> = (0..1234).collect();
        let parts = split_train_val_test(items, DEFAULT_SEED, SplitRatios::default());
        assert_eq!(parts.train.len(), 987);
        assert_eq!(parts.val.len(),   123);
        assert_eq!(parts.test.len(),  124);
    }

    #[test]
    fn test_same_seed_same_partitions() {
        let items: Vec<usize> = (0..200).collect();
        let a = split_train_val_test(items.clone(), 42, SplitRatios::default());
        let b = split_train_val_test(items, 42, SplitRatios::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_order() {
        let items: Vec<usize> = (0..200).collect();
        let a = split_train_val_test(items.clone(), 42, SplitRatios::default());
        let b = split_train_val_test(items, 7, SplitRatios::default());
        assert_ne!(a.train, b.train);
    }

    #[test]
    fn test_partitions_disjoint_and_complete() {
        let items: Vec<usize> = (0..97).collect();
        let parts = split_train_val_test(items, DEFAULT_SEED, SplitRatios::default());
        assert_eq!(parts.total(), 97);

        let all: HashSet<usize> = parts
            .train
            .iter()
            .chain(&parts.val)
            .chain(&parts.test)
            .copied()
            .collect();
        assert_eq!(all.len(), 97);
    }

    #[test]
    fn test_small_dataset_may_leave_val_empty() {
        let items: Vec<usize> = (0..5).collect();
        let parts = split_train_val_test(items, DEFAULT_SEED, SplitRatios::default());
        assert_eq!(parts.train.len(), 4);
        assert!(parts.val.is_empty());
        assert_eq!(parts.test.len(), 1);
    }

    #[test]
    fn test_empty_dataset() {
        let parts = split_train_val_test(Vec::<usize>::new(), DEFAULT_SEED, SplitRatios::default());
        assert_eq!(parts.total(), 0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(8, 10), 80.0);
        assert_eq!(percentage(0, 0), 0.0);
    }
}
