//! Symbol frequency analysis
//!
//! The input is treated as an exact byte sequence: line terminators (`\n`,
//! `\r`) are counted like any other symbol and nothing is normalized or
//! reinserted, so compression round-trips byte-for-byte on any input.

use crate::ALPHABET_SIZE;

/// Occurrence counts for every byte value in an input sequence.
///
/// Built once per compression run and immutable afterwards. The sum of all
/// counts equals the number of input bytes.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
    total: u64,
}

impl FrequencyTable {
    /// Count every byte of `input` exactly as it appears.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in input {
            counts[byte as usize] += 1;
        }
        Self {
            counts,
            total: input.len() as u64,
        }
    }

    /// Occurrences of `symbol` in the input.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols with a non-zero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True if no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(symbol, count)` pairs with non-zero counts, in
    /// ascending symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}
