// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::error::InputError;

/// Computes the LCP array of `text` from its suffix array.
///
/// Entry `i` of the result is the length of the longest common prefix of the suffixes starting at
/// `suffix_array[i]` and `suffix_array[i + 1]`. The result therefore has one entry fewer than the
/// text, and is empty for texts of zero or one bytes.
///
/// This operation is *O*(*n*).
///
/// # Errors
///
/// Returns an error if `suffix_array` is not the same length as `text` or holds a value that is
/// not a position in `text`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sarray::InputError> {
/// let text = b"banana";
/// let sa = sarray::build_suffix_array(text)?;
///
/// assert_eq!(sarray::build_lcp_array(text, &sa)?, [1, 3, 0, 0, 2]);
/// # Ok(())
/// # }
/// ```
pub fn build_lcp_array(text: &[u8], suffix_array: &[u32]) -> Result<Vec<u32>, InputError> {
    if text.len() != suffix_array.len() {
        return Err(InputError::LengthMismatch {
            text: text.len(),
            suffix_array: suffix_array.len(),
        });
    }
    if let Some(&position) = suffix_array.iter().find(|&&p| p as usize >= text.len()) {
        return Err(InputError::PositionOutOfBounds {
            position,
            len: text.len(),
        });
    }

    Ok(kasai(text, suffix_array))
}

/// Kasai's algorithm.
///
/// Walks suffixes in text order rather than sorted order. If the suffix at `i` shares `k` bytes
/// with its sorted successor, the suffix at `i + 1` shares at least `k - 1` with its own, so the
/// match length only ever drops by one between steps.
///
/// `suffix_array` must be a permutation of the positions of `text`.
pub(crate) fn kasai(text: &[u8], suffix_array: &[u32]) -> Vec<u32> {
    let n = text.len();
    if n < 2 {
        return Vec::new();
    }

    // rank[p] is the sorted position of the suffix starting at p
    let mut rank = vec![0u32; n];
    for (i, &p) in suffix_array.iter().enumerate() {
        rank[p as usize] = i as u32;
    }

    let mut lcp = vec![0u32; n - 1];
    let mut k: usize = 0;
    for i in 0..n {
        let r = rank[i] as usize;
        if r == n - 1 {
            // The largest suffix has no successor
            k = 0;
            continue;
        }

        let j = suffix_array[r + 1] as usize;
        while i + k < n && j + k < n && text[i + k] == text[j + k] {
            k += 1;
        }
        lcp[r] = k as u32;

        k = k.saturating_sub(1);
    }

    lcp
}
