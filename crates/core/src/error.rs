//! Error types for the coding engine.
//!
//! All operations return structured errors rather than panicking.
//! This lets a caller render a "not ready" or "error" state instead of
//! crashing.
//!
//! Two conditions are deliberately NOT errors:
//! - Empty input: frequency counting yields an empty table, tree building
//!   yields no tree, code generation yields an empty table. That is
//!   "nothing to show", not a fault.
//! - Single-symbol alphabet: handled by a one-bit-codeword special case
//!   in tree building and code generation.

use thiserror::Error;

/// Top-level error type for all engine operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Encode: a message symbol has no codeword
/// - Decode: the bitstream cannot be decoded against the tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Encoding failed (unknown symbol under the strict policy)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Decoding failed (malformed bitstream)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Encoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A message symbol has no entry in the code table.
    ///
    /// Raised only under `UnknownSymbolPolicy::Fail`; the `Skip` policy
    /// counts the symbol instead of failing.
    #[error("symbol {symbol:?} at position {position} has no codeword")]
    UnknownSymbol { symbol: char, position: usize },
}

/// Decoding errors, all meaning the bitstream is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contained a character other than '0' or '1'.
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },

    /// The stream ended in the middle of a codeword.
    #[error("bitstream ended mid-codeword after {consumed} bits")]
    Truncated { consumed: usize },

    /// A bit led to a child that does not exist.
    ///
    /// Internal nodes always carry two children, so this is only
    /// reachable on a single-leaf tree, whose lone codeword is "0".
    #[error("no branch to follow for bit at position {position}")]
    DeadEnd { position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
