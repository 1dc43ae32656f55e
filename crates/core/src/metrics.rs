//! Derived compression statistics.
//!
//! Pure read-only measurements over a completed run; nothing here feeds
//! back into encoding or decoding. The uncompressed baseline assumes
//! 8 bits per symbol (ASCII).
//!
//! All ratios guard their denominators: an empty message or an empty
//! bitstream measures as 0.0 rather than NaN or infinity, so callers
//! can always print the numbers.

use crate::code::CodeTable;
use crate::freq::count_frequencies;

/// Bits per symbol assumed for the uncompressed baseline.
const BASELINE_BITS_PER_SYMBOL: usize = 8;

/// Statistics for one encode run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Message length × 8 (uncompressed baseline)
    pub original_bits: usize,

    /// Length of the encoded bitstring
    pub encoded_bits: usize,

    /// original_bits ÷ encoded_bits (e.g. 2.0 means 2:1)
    pub compression_ratio: f64,

    /// (original − encoded) ÷ original × 100; negative if the encoding
    /// expanded the message
    pub space_saved_percent: f64,

    /// Mean codeword length over the message symbols, in bits
    pub average_code_length: f64,

    /// Shannon entropy of the message's symbol distribution, in
    /// bits/symbol (the theoretical minimum average codeword length)
    pub entropy: f64,

    /// entropy ÷ average_code_length, at most 1.0 for a prefix code
    pub efficiency: f64,
}

impl CompressionStats {
    /// Measure a completed run of `text` encoded as `bits` with `codes`.
    pub fn measure(text: &str, bits: &str, codes: &CodeTable) -> Self {
        let symbol_count = text.chars().count();
        let original_bits = symbol_count * BASELINE_BITS_PER_SYMBOL;
        let encoded_bits = bits.len();

        let compression_ratio = if encoded_bits == 0 {
            0.0
        } else {
            original_bits as f64 / encoded_bits as f64
        };

        let space_saved_percent = if original_bits == 0 {
            0.0
        } else {
            (original_bits as f64 - encoded_bits as f64) / original_bits as f64 * 100.0
        };

        let total_code_length: usize = text
            .chars()
            .map(|symbol| codes.get(symbol).map_or(0, str::len))
            .sum();
        let average_code_length = if symbol_count == 0 {
            0.0
        } else {
            total_code_length as f64 / symbol_count as f64
        };

        let entropy = entropy_of(text);
        let efficiency = if average_code_length == 0.0 {
            0.0
        } else {
            entropy / average_code_length
        };

        Self {
            original_bits,
            encoded_bits,
            compression_ratio,
            space_saved_percent,
            average_code_length,
            entropy,
            efficiency,
        }
    }
}

/// Compression ratio = (symbol count × 8) ÷ encoded bit count.
///
/// Returns 0.0 for an empty bitstream.
pub fn compression_ratio(text: &str, bits: &str) -> f64 {
    if bits.is_empty() {
        return 0.0;
    }
    (text.chars().count() * BASELINE_BITS_PER_SYMBOL) as f64 / bits.len() as f64
}

/// Shannon entropy −Σ p·log2(p) of the observed symbol distribution,
/// in bits per symbol. Empty input measures 0.0.
pub fn entropy_of(text: &str) -> f64 {
    let freqs = count_frequencies(text);
    let total = freqs.total();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let sum: f64 = freqs
        .entries()
        .iter()
        .map(|entry| {
            let p = entry.frequency as f64 / total;
            p * p.log2()
        })
        .sum();
    -sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::generate_codes;
    use crate::encode::{encode, UnknownSymbolPolicy};
    use crate::freq::count_frequencies;
    use crate::tree::build_tree;

    fn run(text: &str) -> CompressionStats {
        let tree = build_tree(&count_frequencies(text));
        let codes = generate_codes(tree.as_ref());
        let encoded = encode(text, &codes, UnknownSymbolPolicy::Fail).unwrap();
        CompressionStats::measure(text, &encoded.bits, &codes)
    }

    #[test]
    fn test_empty_run_is_all_zeros() {
        let stats = run("");
        assert_eq!(stats.original_bits, 0);
        assert_eq!(stats.encoded_bits, 0);
        assert_eq!(stats.compression_ratio, 0.0);
        assert_eq!(stats.space_saved_percent, 0.0);
        assert_eq!(stats.average_code_length, 0.0);
        assert_eq!(stats.entropy, 0.0);
        assert_eq!(stats.efficiency, 0.0);
    }

    #[test]
    fn test_single_symbol_stats() {
        let stats = run("aaaa");
        assert_eq!(stats.original_bits, 32);
        assert_eq!(stats.encoded_bits, 4);
        assert_eq!(stats.compression_ratio, 8.0);
        assert_eq!(stats.average_code_length, 1.0);
        assert_eq!(stats.entropy, 0.0);
    }

    #[test]
    fn test_uniform_four_symbols() {
        // Four equally likely symbols: entropy is exactly 2 bits and the
        // code achieves it, so efficiency is 1.0.
        let stats = run("abcd");
        assert_eq!(stats.original_bits, 32);
        assert_eq!(stats.encoded_bits, 8);
        assert_eq!(stats.compression_ratio, 4.0);
        assert_eq!(stats.space_saved_percent, 75.0);
        assert_eq!(stats.average_code_length, 2.0);
        assert!((stats.entropy - 2.0).abs() < 1e-12);
        assert!((stats.efficiency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_length_matches_bitstream() {
        let text = "hello world";
        let stats = run(text);
        let expected = stats.encoded_bits as f64 / text.chars().count() as f64;
        assert!((stats.average_code_length - expected).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_lower_bounds_average_length() {
        for text in ["hello world", "mississippi", "abracadabra", "aabbcc"] {
            let stats = run(text);
            assert!(
                stats.entropy <= stats.average_code_length + 1e-12,
                "entropy {} exceeds average length {} for {text:?}",
                stats.entropy,
                stats.average_code_length
            );
            assert!(stats.efficiency <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_free_ratio_matches_struct() {
        let text = "hello world";
        let tree = build_tree(&count_frequencies(text));
        let codes = generate_codes(tree.as_ref());
        let encoded = encode(text, &codes, UnknownSymbolPolicy::Fail).unwrap();

        let stats = CompressionStats::measure(text, &encoded.bits, &codes);
        assert_eq!(
            compression_ratio(text, &encoded.bits),
            stats.compression_ratio
        );
    }
}
