// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{cmp::Ordering, ops::Range};

/// Finds one occurrence of `pattern` in `text`.
///
/// Binary searches `suffix_array` for a suffix whose first `pattern.len()` bytes equal `pattern`
/// and returns that suffix's starting position, or `None` if no suffix matches. When `pattern`
/// occurs several times, any one of the occurrences may be returned; use [`search_range()`] to
/// get all of them.
///
/// An empty pattern matches every suffix, and the position of the smallest suffix is returned.
///
/// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sarray::InputError> {
/// let text = b"banana";
/// let sa = sarray::build_suffix_array(text)?;
///
/// assert!(matches!(sarray::search_pattern(text, &sa, b"ana"), Some(1 | 3)));
/// assert_eq!(sarray::search_pattern(text, &sa, b"xyz"), None);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn search_pattern(text: &[u8], suffix_array: &[u32], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return suffix_array.first().map(|&p| p as usize);
    }

    suffix_array
        .binary_search_by(|&suffix| compare_prefix(text, suffix, pattern))
        .ok()
        .map(|i| suffix_array[i] as usize)
}

/// Finds every occurrence of `pattern` in `text`.
///
/// Returns the range of indices into `suffix_array` whose suffixes start with `pattern`. Because
/// those suffixes are sorted, they are contiguous; the range is empty when `pattern` does not
/// occur. The positions in the range are in suffix order, not text order.
///
/// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sarray::InputError> {
/// let text = b"banana";
/// let sa = sarray::build_suffix_array(text)?;
/// let range = sarray::search_range(text, &sa, b"ana");
///
/// assert_eq!(&sa[range], [3, 1]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn search_range(text: &[u8], suffix_array: &[u32], pattern: &[u8]) -> Range<usize> {
    let start = suffix_array
        .partition_point(|&suffix| compare_prefix(text, suffix, pattern) == Ordering::Less);
    let end = start
        + suffix_array[start..]
            .partition_point(|&suffix| compare_prefix(text, suffix, pattern) == Ordering::Equal);

    start..end
}

/// Compares the suffix starting at `suffix`, truncated to `pattern.len()` bytes, with `pattern`.
///
/// A suffix shorter than the pattern that is a prefix of it compares as less.
fn compare_prefix(text: &[u8], suffix: u32, pattern: &[u8]) -> Ordering {
    text.get(suffix as usize..)
        .unwrap_or_default()
        .iter()
        .take(pattern.len())
        .cmp(pattern.iter())
}
