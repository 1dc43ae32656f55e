//! Message encoding against a code table.
//!
//! Encoding is a straight concatenation of per-symbol codewords, in
//! message order. The interesting part is what happens when a symbol
//! has no codeword: the behavior is an explicit, caller-chosen policy
//! rather than silent data loss.

use crate::code::CodeTable;
use crate::error::{EncodeError, Result};

/// What to do with a message symbol that has no codeword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSymbolPolicy {
    /// Contribute nothing for the symbol, but count it in
    /// [`Encoded::skipped`]. The count makes the loss visible; a
    /// decoded message will simply lack the skipped symbols.
    #[default]
    Skip,

    /// Fail at the first unknown symbol with
    /// [`EncodeError::UnknownSymbol`].
    Fail,
}

/// Result of encoding a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Concatenated codewords as '0'/'1' characters
    pub bits: String,

    /// Symbols dropped for lack of a codeword (always 0 under
    /// `UnknownSymbolPolicy::Fail`)
    pub skipped: usize,
}

/// Encode `text` using `codes`.
///
/// # Errors
/// `EncodeError::UnknownSymbol` if a symbol has no codeword and the
/// policy is `Fail`.
pub fn encode(text: &str, codes: &CodeTable, policy: UnknownSymbolPolicy) -> Result<Encoded> {
    let mut bits = String::new();
    let mut skipped = 0;

    for (position, symbol) in text.chars().enumerate() {
        match codes.get(symbol) {
            Some(code) => bits.push_str(code),
            None => match policy {
                UnknownSymbolPolicy::Skip => skipped += 1,
                UnknownSymbolPolicy::Fail => {
                    return Err(EncodeError::UnknownSymbol { symbol, position }.into());
                }
            },
        }
    }

    Ok(Encoded { bits, skipped })
}
