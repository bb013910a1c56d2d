// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use sarray::{BuildConfig, SuffixArray};

/// Print the suffix array and LCP array of a text, and search it for a pattern
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Text to index
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,
    /// Read the text to index from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Pattern to search for
    #[arg(short, long)]
    pattern: Option<String>,
    /// Report every occurrence of the pattern instead of one
    #[arg(short, long, requires = "pattern")]
    all: bool,
    /// Sort suffixes on multiple threads
    #[arg(long)]
    parallel: bool,
    /// Print only suffix positions, not the suffixes themselves
    #[arg(long)]
    no_suffixes: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone().into_bytes(),
        (None, Some(file)) => {
            let mut data = fs::read(file)
                .with_context(|| format!("Failed to read text file '{}'", file.display()))?;
            strip_line_ending(&mut data);
            data
        }
        (None, None) => unreachable!("clap requires a text or a file"),
    };

    let sa = SuffixArray::with_config(&text, BuildConfig::new().parallel(args.parallel))
        .context("Failed to build suffix array")?;
    let lcp = sa.lcp_array();

    let mut out = BufWriter::new(io::stdout().lock());
    write_suffix_array(&mut out, &sa, !args.no_suffixes)
        .and_then(|()| write_lcp_array(&mut out, &lcp))
        .context("Failed to write arrays")?;

    if let Some(pattern) = &args.pattern {
        write_search(&mut out, &sa, pattern.as_bytes(), args.all)
            .context("Failed to write search result")?;
    }

    out.flush().context("Failed to flush output")?;

    Ok(())
}

/// Removes a single trailing `\n` or `\r\n`, as left by most editors
fn strip_line_ending(data: &mut Vec<u8>) {
    if data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }
}

fn write_suffix_array<W: Write>(out: &mut W, sa: &SuffixArray, suffixes: bool) -> io::Result<()> {
    writeln!(out, "--- Suffix Array ---")?;
    for &p in sa.as_slice() {
        if suffixes {
            let suffix = String::from_utf8_lossy(&sa.text()[p as usize..]);
            writeln!(out, "{p:>2} : {suffix}")?;
        } else {
            writeln!(out, "{p:>2}")?;
        }
    }

    Ok(())
}

fn write_lcp_array<W: Write>(out: &mut W, lcp: &[u32]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- LCP Array ---")?;
    for (i, h) in lcp.iter().enumerate() {
        writeln!(out, "lcp[{i:>2}] = {h}")?;
    }

    Ok(())
}

fn write_search<W: Write>(
    out: &mut W,
    sa: &SuffixArray,
    pattern: &[u8],
    all: bool,
) -> io::Result<()> {
    writeln!(out)?;
    if all {
        let mut hits = sa.occurrences(pattern).to_vec();
        hits.sort_unstable();
        if hits.is_empty() {
            writeln!(out, "Pattern not found")?;
        } else {
            let hits: Vec<_> = hits.iter().map(u32::to_string).collect();
            writeln!(out, "Pattern found at indices {}", hits.join(", "))?;
        }
    } else {
        match sa.search(pattern) {
            Some(pos) => writeln!(out, "Pattern found at index {pos}")?,
            None => writeln!(out, "Pattern not found")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn render(text: &str, pattern: &str, all: bool) -> String {
        let sa = SuffixArray::new(text.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_suffix_array(&mut out, &sa, true).unwrap();
        write_lcp_array(&mut out, &sa.lcp_array()).unwrap();
        write_search(&mut out, &sa, pattern.as_bytes(), all).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn banana_report() {
        let expected = "\
--- Suffix Array ---
 5 : a
 3 : ana
 1 : anana
 0 : banana
 4 : na
 2 : nana

--- LCP Array ---
lcp[ 0] = 1
lcp[ 1] = 3
lcp[ 2] = 0
lcp[ 3] = 0
lcp[ 4] = 2

Pattern found at indices 1, 3
";
        assert_eq!(render("banana", "ana", true), expected);
    }

    #[test]
    fn missing_pattern() {
        assert!(render("banana", "xyz", false).ends_with("Pattern not found\n"));
        assert!(render("banana", "xyz", true).ends_with("Pattern not found\n"));
    }

    #[test]
    fn strips_one_line_ending() {
        let mut data = b"banana\r\n\n".to_vec();
        strip_line_ending(&mut data);
        assert_eq!(data, b"banana\r\n");
        strip_line_ending(&mut data);
        assert_eq!(data, b"banana");
    }
}
