//! Bitstream decoding by walking the tree.
//!
//! A cursor starts at the root; '0' steps left, '1' steps right; landing
//! on a leaf emits its symbol and resets the cursor. Prefix-freeness of
//! the codewords makes this unambiguous without delimiters.
//!
//! Malformed input is a structured [`DecodeError`], never a panic:
//! a non-bit character, a stream that ends between codewords' leaf
//! boundaries, or a step with nowhere to go.

use crate::error::{DecodeError, Result};
use crate::tree::HuffmanNode;

/// Decode `bits` against the tree rooted at `root`.
///
/// A missing tree or an empty bitstream yields an empty string. For any
/// bitstream produced by [`encode`](crate::encode::encode) with this
/// tree's codes, decoding reproduces the original message.
///
/// # Errors
/// - `DecodeError::InvalidBit` for characters other than '0'/'1'
/// - `DecodeError::Truncated` if the stream ends mid-codeword
/// - `DecodeError::DeadEnd` if a bit has no branch to follow (single-leaf
///   tree given a '1')
pub fn decode(bits: &str, root: Option<&HuffmanNode>) -> Result<String> {
    let Some(root) = root else {
        return Ok(String::new());
    };

    let mut decoded = String::new();

    // Single-leaf tree: the lone codeword is "0", so every '0' emits the
    // symbol directly. There is no branch for '1' to follow.
    if let Some(symbol) = root.symbol() {
        for (position, bit) in bits.chars().enumerate() {
            match bit {
                '0' => decoded.push(symbol),
                '1' => return Err(DecodeError::DeadEnd { position }.into()),
                other => {
                    return Err(DecodeError::InvalidBit {
                        bit: other,
                        position,
                    }
                    .into())
                }
            }
        }
        return Ok(decoded);
    }

    let mut cursor = root;
    let mut consumed = 0;

    for (position, bit) in bits.chars().enumerate() {
        let next = match bit {
            '0' => cursor.left(),
            '1' => cursor.right(),
            other => {
                return Err(DecodeError::InvalidBit {
                    bit: other,
                    position,
                }
                .into())
            }
        };

        // The cursor only ever rests on the root or an internal node,
        // and internal nodes always carry both children.
        cursor = match next {
            Some(node) => node,
            None => return Err(DecodeError::DeadEnd { position }.into()),
        };

        if let Some(symbol) = cursor.symbol() {
            decoded.push(symbol);
            cursor = root;
        }
        consumed = position + 1;
    }

    // A cursor resting away from the root means the final codeword was
    // never completed.
    if !std::ptr::eq(cursor, root) {
        return Err(DecodeError::Truncated { consumed }.into());
    }

    Ok(decoded)
}
