// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An error indicating that the input given to a construction routine is unusable.
///
/// Failing to find a pattern is not an error; searches report that case as `None`.
///
/// # Examples
///
/// ```
/// use sarray::InputError;
///
/// let text = b"banana";
/// let lcp = sarray::build_lcp_array(text, &[0, 1, 2]);
///
/// assert!(matches!(lcp, Err(InputError::LengthMismatch { .. })));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputError {
    /// The text has more code units than a `u32` position can address
    TextTooLong(usize),
    /// The suffix array and the text it supposedly indexes have different lengths
    LengthMismatch {
        /// Length of the text
        text: usize,
        /// Length of the suffix array
        suffix_array: usize,
    },
    /// The suffix array holds a value that is not a position in the text
    PositionOutOfBounds {
        /// The offending suffix array entry
        position: u32,
        /// Length of the text
        len: usize,
    },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InputError::TextTooLong(len) => {
                write!(f, "text too long: {len} bytes, at most {} supported", u32::MAX)
            }
            InputError::LengthMismatch { text, suffix_array } => write!(
                f,
                "length mismatch: text has {text} bytes, suffix array has {suffix_array} entries",
            ),
            InputError::PositionOutOfBounds { position, len } => {
                write!(f, "suffix array entry {position} is outside a text of {len} bytes")
            }
        }
    }
}

impl Error for InputError {}
