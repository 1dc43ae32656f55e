//! One-shot pipeline over the whole engine.
//!
//! Stages run back-to-back and synchronously: text → frequencies → tree
//! → codes → encoded bits → decoded text → stats. Each run rebuilds the
//! tree and code table wholesale; nothing carries over between runs, and
//! nothing is mutated after its stage completes.

use crate::code::{generate_codes, CodeTable};
use crate::decode::decode;
use crate::encode::{encode, UnknownSymbolPolicy};
use crate::error::Result;
use crate::freq::{count_frequencies, FrequencyTable};
use crate::metrics::CompressionStats;
use crate::tree::{build_tree, HuffmanNode};

/// Outputs of every pipeline stage for one input.
///
/// `tree` is `None` and the remaining fields are empty when the input
/// had no symbols. The round-trip invariant is `decoded == text`
/// whenever no symbols were skipped.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// The input message
    pub text: String,

    /// Per-symbol occurrence counts
    pub frequencies: FrequencyTable,

    /// The coding tree, absent for empty input
    pub tree: Option<HuffmanNode>,

    /// Symbol → codeword table derived from the tree
    pub codes: CodeTable,

    /// The encoded bitstring
    pub bits: String,

    /// Symbols dropped during encoding under the `Skip` policy
    pub skipped_symbols: usize,

    /// Result of decoding `bits` back through the tree
    pub decoded: String,

    /// Derived statistics for the run
    pub stats: CompressionStats,
}

impl PipelineRun {
    /// True when decoding reproduced the input exactly.
    pub fn verified(&self) -> bool {
        self.decoded == self.text
    }
}

/// Run the full pipeline over `text`.
///
/// Empty input is not an error: the run simply carries no tree, an empty
/// code table, and empty bit/decoded strings.
///
/// # Errors
/// Propagates [`EncodeError`](crate::error::EncodeError) under the
/// `Fail` policy. Decoding a bitstream the pipeline itself produced
/// cannot fail.
pub fn process(text: &str, policy: UnknownSymbolPolicy) -> Result<PipelineRun> {
    let frequencies = count_frequencies(text);
    let tree = build_tree(&frequencies);
    let codes = generate_codes(tree.as_ref());
    let encoded = encode(text, &codes, policy)?;
    let decoded = decode(&encoded.bits, tree.as_ref())?;
    let stats = CompressionStats::measure(text, &encoded.bits, &codes);

    Ok(PipelineRun {
        text: text.to_string(),
        frequencies,
        tree,
        codes,
        bits: encoded.bits,
        skipped_symbols: encoded.skipped,
        decoded,
        stats,
    })
}
