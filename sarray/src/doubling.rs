// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    error::InputError,
    rank::{NO_RANK, RankSorter, SuffixRecord},
};

/// Computes the suffix array of `text` with default options.
///
/// Entry `i` of the result is the starting position of the `i`-th lexicographically smallest
/// suffix. A suffix that is a proper prefix of another sorts first.
///
/// This function is a shorthand for [`build_suffix_array_with_config()`] called with the default
/// options.
///
/// This operation is *O*(*n* \* log(*n*)).
///
/// # Errors
///
/// Returns an error if `text.len() > u32::MAX`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sarray::InputError> {
/// let sa = sarray::build_suffix_array(b"banana")?;
///
/// assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
/// # Ok(())
/// # }
/// ```
pub fn build_suffix_array(text: &[u8]) -> Result<Vec<u32>, InputError> {
    build_suffix_array_with_config(text, &BuildConfig::default())
}

/// Computes the suffix array of `text`.
///
/// Suffixes are sorted by prefix doubling: each round ranks every suffix by a prefix twice as long
/// as the round before, reusing the previous round's ranks for both halves, until the compared
/// prefix covers the whole text.
///
/// # Errors
///
/// Returns an error if `text.len() > u32::MAX`.
///
/// # Examples
///
/// ```
/// use sarray::BuildConfig;
///
/// # fn main() -> Result<(), sarray::InputError> {
/// let options = *BuildConfig::new().parallel(true);
/// let sa = sarray::build_suffix_array_with_config(b"abracadabra", &options)?;
///
/// assert_eq!(sa, [10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
/// # Ok(())
/// # }
/// ```
pub fn build_suffix_array_with_config(
    text: &[u8],
    options: &BuildConfig,
) -> Result<Vec<u32>, InputError> {
    if u32::try_from(text.len()).is_err() {
        return Err(InputError::TextTooLong(text.len()));
    }

    Ok(match text.len() {
        0 => Vec::new(),
        1 => vec![0],
        _ => prefix_doubling(text, RankSorter::new(options.parallel)),
    })
}

fn prefix_doubling(text: &[u8], sorter: RankSorter) -> Vec<u32> {
    let n = text.len();

    // Rank every suffix by its first two bytes
    let mut records: Vec<_> = (0..n)
        .map(|i| SuffixRecord {
            index: i as u32,
            primary: text[i].into(),
            secondary: text.get(i + 1).map_or(NO_RANK, |&b| b.into()),
        })
        .collect();
    sorter.sort(&mut records);

    // position[i] is where the suffix starting at i currently sits in `records`
    let mut position = vec![0u32; n];

    // `half` is the length already covered by each rank; the round sorts by prefixes of 2 * half
    let mut half: usize = 2;
    while half < n {
        let distinct = rerank(&mut records);
        if distinct == n {
            // Every prefix compared so far is unique, so the order is already final
            break;
        }

        for (i, record) in records.iter().enumerate() {
            position[record.index as usize] = i as u32;
        }

        for i in 0..records.len() {
            let next = records[i].index as usize + half;
            records[i].secondary = if next < n {
                records[position[next] as usize].primary
            } else {
                NO_RANK
            };
        }

        sorter.sort(&mut records);
        half = half.saturating_mul(2);
    }

    records.into_iter().map(|record| record.index).collect()
}

/// Replaces each record's `(primary, secondary)` pair with a single dense rank.
///
/// `records` must be sorted. Records whose pairs are equal get equal ranks. Returns the number of
/// distinct ranks handed out.
fn rerank(records: &mut [SuffixRecord]) -> usize {
    let Some(first) = records.first_mut() else {
        return 0;
    };

    let mut rank: i64 = 0;
    let mut prev_primary = first.primary;
    first.primary = rank;

    for i in 1..records.len() {
        let same_key = records[i].primary == prev_primary
            && records[i].secondary == records[i - 1].secondary;
        if !same_key {
            prev_primary = records[i].primary;
            rank += 1;
        }
        records[i].primary = rank;
    }

    // Ranks count up from 0, which keeps NO_RANK below all of them
    debug_assert!(rank > NO_RANK, "ranks must stay above the sentinel");

    rank as usize + 1
}

/// Configuration for suffix array construction.
///
/// The defaults suit most inputs. The resulting suffix array never depends on these options, only
/// the time taken to build it does.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct BuildConfig {
    parallel: bool,
}

impl BuildConfig {
    /// Creates a new configuration for suffix array construction
    ///
    /// This configuration can be reused across builds.
    pub const fn new() -> Self {
        Self {
            parallel: Self::DEFAULT_PARALLEL,
        }
    }

    /// Sets whether to sort suffixes on multiple threads.
    ///
    /// This only has an effect when the crate is compiled with the `parallel` feature. Parallel
    /// sorting pays off for large texts; for short ones the thread coordination costs more than it
    /// saves.
    pub fn parallel(&mut self, parallel: bool) -> &mut Self {
        self.parallel = parallel;
        self
    }

    /// Whether to sort on multiple threads by default
    pub const DEFAULT_PARALLEL: bool = false;
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{naive_suffix_array, pseudo_random_text};

    #[test]
    fn banana() {
        assert_eq!(build_suffix_array(b"banana").unwrap(), [5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn empty_text() {
        assert!(build_suffix_array(b"").unwrap().is_empty());
    }

    #[test]
    fn single_byte() {
        assert_eq!(build_suffix_array(b"a").unwrap(), [0]);
    }

    #[test]
    fn two_bytes() {
        assert_eq!(build_suffix_array(b"ab").unwrap(), [0, 1]);
        assert_eq!(build_suffix_array(b"ba").unwrap(), [1, 0]);
        assert_eq!(build_suffix_array(b"aa").unwrap(), [1, 0]);
    }

    #[test]
    fn shorter_suffix_sorts_first() {
        // Every suffix is a prefix of the ones before it in the text
        assert_eq!(build_suffix_array(b"aaaaa").unwrap(), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn zero_bytes_rank_above_sentinel() {
        assert_eq!(build_suffix_array(b"\0\0a\0").unwrap(), [3, 0, 1, 2]);
    }

    #[test]
    fn high_bytes() {
        let text = [0xffu8, 0x00, 0xff, 0x80, 0xff];
        assert_eq!(build_suffix_array(&text).unwrap(), naive_suffix_array(&text));
    }

    #[test]
    fn short_strings_match_naive() {
        let test_strings = [
            "aaaaaaab",
            "baaaaaaa",
            "abaaaaaa",
            "abababab",
            "abcbabcba",
            "mississippi",
            "cabbage abc food abc vegetables",
            "ktrthleluzsxleo",
            "fjhccfahejdacbffahbf",
            "wprnnuivivdygnarkzkjmvmpuxuzbsehrmunexkvkjczbbrawh",
        ];
        for test_str in test_strings {
            let text = test_str.as_bytes();
            assert_eq!(
                build_suffix_array(text).unwrap(),
                naive_suffix_array(text),
                "suffix array mismatch for {test_str:?}",
            );
        }
    }

    #[test]
    fn random_strings_match_naive() {
        for seed in 0..50 {
            let text = pseudo_random_text(seed, 300, 4);
            assert_eq!(
                build_suffix_array(&text).unwrap(),
                naive_suffix_array(&text),
                "suffix array mismatch for seed {seed}",
            );
        }
    }

    #[test]
    fn parallel_option_does_not_change_result() {
        let text = pseudo_random_text(7, 2000, 3);
        let sequential = build_suffix_array(&text).unwrap();
        let parallel = build_suffix_array_with_config(&text, BuildConfig::new().parallel(true));

        assert_eq!(parallel.unwrap(), sequential);
    }

    #[test]
    fn rerank_collapses_equal_pairs() {
        let record = |index, primary, secondary| SuffixRecord {
            index,
            primary,
            secondary,
        };
        let mut records = [
            record(3, 97, NO_RANK),
            record(0, 97, 98),
            record(2, 97, 98),
            record(1, 98, 97),
        ];

        assert_eq!(rerank(&mut records), 3);

        let ranks: Vec<_> = records.iter().map(|r| r.primary).collect();
        assert_eq!(ranks, [0, 1, 1, 2]);
    }

    #[test]
    fn rerank_empty() {
        assert_eq!(rerank(&mut []), 0);
    }
}
