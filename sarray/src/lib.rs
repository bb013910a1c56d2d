// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix arrays, LCP arrays, and pattern search for byte strings.
//!
//! This crate sorts every suffix of a text with prefix doubling, derives the longest common
//! prefixes of adjacent sorted suffixes with Kasai's algorithm, and locates patterns by binary
//! search over the sorted suffixes. Texts are treated as plain sequences of bytes; no sentinel is
//! required at the end of the data.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), sarray::InputError> {
//! let text = b"banana";
//! let sa = sarray::build_suffix_array(text)?;
//! assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
//!
//! let lcp = sarray::build_lcp_array(text, &sa)?;
//! assert_eq!(lcp, [1, 3, 0, 0, 2]);
//!
//! let pos = sarray::search_pattern(text, &sa, b"ana").unwrap();
//! assert_eq!(&text[pos..pos + 3], b"ana");
//! assert_eq!(sarray::search_pattern(text, &sa, b"xyz"), None);
//! # Ok(())
//! # }
//! ```
//!
//! The same operations are available on a [`SuffixArray`], which keeps the text and its array
//! together:
//!
//! ```
//! use sarray::SuffixArray;
//!
//! # fn main() -> Result<(), sarray::InputError> {
//! let sa = SuffixArray::new(b"mississippi")?;
//! let mut hits = sa.occurrences(b"ssi").to_vec();
//! hits.sort_unstable();
//! assert_eq!(hits, [2, 5]);
//! # Ok(())
//! # }
//! ```

mod doubling;
mod error;
mod lcp;
mod rank;
mod search;
mod suffix_array;
#[cfg(test)]
mod testing;

pub use doubling::{BuildConfig, build_suffix_array, build_suffix_array_with_config};
pub use error::InputError;
pub use lcp::build_lcp_array;
pub use search::{search_pattern, search_range};
pub use suffix_array::SuffixArray;
