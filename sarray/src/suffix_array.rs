// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    doubling::{self, BuildConfig},
    error::InputError,
    lcp, search,
};

/// A suffix array for a byte string.
///
/// Borrows the text it was built from, so queries never need the text passed back in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuffixArray<'a> {
    data: &'a [u8],
    inner: Vec<u32>,
}

impl<'a> SuffixArray<'a> {
    /// Creates a new `SuffixArray` for `data`.
    ///
    /// This operation is *O*(*n* \* log(*n*)).
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarray::SuffixArray;
    ///
    /// # fn main() -> Result<(), sarray::InputError> {
    /// let data = b"Hello, world!";
    /// let sa = SuffixArray::new(data)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a [u8]) -> Result<Self, InputError> {
        Self::with_config(data, &BuildConfig::default())
    }

    /// Creates a new `SuffixArray` for `data` using the given build options.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len() > u32::MAX`.
    pub fn with_config(data: &'a [u8], options: &BuildConfig) -> Result<Self, InputError> {
        let inner = doubling::build_suffix_array_with_config(data, options)?;

        Ok(Self { data, inner })
    }

    /// Returns the text this suffix array indexes.
    #[must_use]
    pub fn text(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the starting positions of all suffixes in sorted order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.inner
    }

    /// Returns the number of suffixes, which is also the length of the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Consumes the `SuffixArray`, returning the sorted starting positions.
    #[must_use]
    pub fn into_inner(self) -> Vec<u32> {
        self.inner
    }

    /// Computes the LCP array between adjacent suffixes.
    ///
    /// See [`build_lcp_array()`](crate::build_lcp_array) for the layout of the result.
    ///
    /// This operation is *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use sarray::SuffixArray;
    ///
    /// # fn main() -> Result<(), sarray::InputError> {
    /// let sa = SuffixArray::new(b"banana")?;
    /// assert_eq!(sa.lcp_array(), [1, 3, 0, 0, 2]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn lcp_array(&self) -> Vec<u32> {
        lcp::kasai(self.data, &self.inner)
    }

    /// Returns the position of one occurrence of `pattern`, if there is any.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    #[must_use]
    pub fn search(&self, pattern: &[u8]) -> Option<usize> {
        search::search_pattern(self.data, &self.inner, pattern)
    }

    /// Returns the positions of every occurrence of `pattern`, in suffix order.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarray::SuffixArray;
    ///
    /// # fn main() -> Result<(), sarray::InputError> {
    /// let sa = SuffixArray::new(b"banana")?;
    /// let leftmost = sa.occurrences(b"an").iter().min();
    /// assert_eq!(leftmost, Some(&1));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn occurrences(&self, pattern: &[u8]) -> &[u32] {
        &self.inner[search::search_range(self.data, &self.inner, pattern)]
    }

    /// Returns `true` if and only if `pattern` is contained in the associated data.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sarray::SuffixArray;
    ///
    /// # fn main() -> Result<(), sarray::InputError> {
    /// let sa = SuffixArray::new(b"Hello, world!")?;
    /// assert!(sa.contains(b"world"));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.search(pattern).is_some()
    }
}
