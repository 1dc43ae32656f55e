//! huffviz-core: Huffman coding engine for an educational compression demo
//!
//! This library implements the classic greedy prefix-free coding
//! pipeline: count symbol frequencies, build an optimal binary tree by
//! repeated minimum-pair merging, derive per-symbol codewords from leaf
//! paths, encode a message into a '0'/'1' bitstring, and decode it back.
//! Codewords stay literal characters rather than packed bits so that
//! every stage's output remains inspectable by a front end.
//!
//! # Architecture
//!
//! One module per stage, data flowing strictly forward:
//! - `freq`: symbol frequency counting
//! - `tree`: greedy tree construction
//! - `code`: codeword generation by traversal
//! - `encode`: message → bitstring
//! - `decode`: bitstring → message
//! - `metrics`: derived compression statistics
//! - `pipeline`: all stages back-to-back for one input
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Nothing to show is not an error**: empty input yields an absent
//!   tree and empty tables, never a failure
//! - **Immutable artifacts**: tree and code table are built once per run
//!   and only read afterwards

pub mod code;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod metrics;
pub mod pipeline;
pub mod tree;

// Re-export commonly used types and the stage entry points
pub use code::{generate_codes, CodeTable};
pub use decode::decode;
pub use encode::{encode, Encoded, UnknownSymbolPolicy};
pub use error::{Error, Result};
pub use freq::{count_frequencies, FrequencyTable};
pub use metrics::{compression_ratio, CompressionStats};
pub use tree::{build_tree, HuffmanNode};
