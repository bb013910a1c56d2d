// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;

/// Rank given to a suffix with no block after its current one
///
/// Every real rank is a byte value or a counter that starts at 0, so this compares below all of
/// them in every round.
pub(crate) const NO_RANK: i64 = -1;

/// A suffix and the two halves of its current sort key
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SuffixRecord {
    /// Where the suffix starts in the text
    pub(crate) index: u32,
    /// Rank of the first half of the compared prefix
    pub(crate) primary: i64,
    /// Rank of the second half of the compared prefix, or [`NO_RANK`]
    pub(crate) secondary: i64,
}

impl SuffixRecord {
    fn key(&self) -> (i64, i64) {
        (self.primary, self.secondary)
    }
}

/// Orders suffix records by `(primary, secondary)`, ascending.
///
/// Records with equal keys end up in an unspecified relative order. The doubling rounds only ever
/// look at ranks, so that order never reaches the final suffix array.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RankSorter {
    parallel: bool,
}

impl RankSorter {
    pub(crate) const fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    pub(crate) fn sort(&self, records: &mut [SuffixRecord]) {
        if self.parallel {
            #[cfg(feature = "parallel")]
            {
                records.par_sort_unstable_by_key(SuffixRecord::key);
                return;
            }
        }

        records.sort_unstable_by_key(SuffixRecord::key);
    }
}
