// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

// Reference implementations used to check the real ones.

/// Sorts every suffix with the generic slice comparator.
pub(crate) fn naive_suffix_array(text: &[u8]) -> Vec<u32> {
    let mut suffix_array: Vec<u32> = (0..text.len() as u32).collect();
    suffix_array.sort_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
    suffix_array
}

/// Compares each pair of adjacent suffixes byte by byte.
pub(crate) fn naive_lcp_array(text: &[u8], suffix_array: &[u32]) -> Vec<u32> {
    suffix_array
        .windows(2)
        .map(|pair| {
            let a = &text[pair[0] as usize..];
            let b = &text[pair[1] as usize..];
            a.iter().zip(b).take_while(|(x, y)| x == y).count() as u32
        })
        .collect()
}

/// Generates a repetitive text of `len` bytes drawn from the first `alphabet` lowercase letters.
pub(crate) fn pseudo_random_text(seed: usize, len: usize, alphabet: u8) -> Vec<u8> {
    // A primitive random number generator
    fn next_random(num: &mut usize) -> usize {
        *num = (*num % 12345) * (*num % 2949) + 7;
        *num
    }

    let mut rand = seed;
    let mut text: Vec<u8> = Vec::with_capacity(len);
    for j in 0..len {
        if j >= 1 && next_random(&mut rand) & 1 == 0 {
            text.push(text[j - 1]);
        } else {
            text.push(b'a' + (next_random(&mut rand) % usize::from(alphabet)) as u8);
        }
    }
    text
}
