//! Codeword generation by depth-first tree traversal.
//!
//! Descending left appends '0', descending right appends '1'; the path
//! accumulated on reaching a leaf becomes that symbol's codeword.
//! Internal nodes never receive codewords. Because codewords are paths
//! to distinct leaves, no codeword can be a prefix of another.

use std::collections::HashMap;

use crate::tree::HuffmanNode;

/// Mapping from symbol to codeword.
///
/// Codewords are non-empty '0'/'1' character strings. The table is
/// prefix-free by construction: no codeword is a prefix of another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, String>,
}

impl CodeTable {
    /// Look up the codeword for a symbol.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no symbol has a codeword.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over (symbol, codeword) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Entries sorted by codeword length then symbol, the order a
    /// code-length distribution is displayed in.
    pub fn sorted_by_length(&self) -> Vec<(char, &str)> {
        let mut entries: Vec<(char, &str)> = self.iter().collect();
        entries.sort_by_key(|&(symbol, code)| (code.len(), symbol));
        entries
    }
}

/// Generate the code table for a tree.
///
/// A missing tree yields an empty table. A single-leaf tree yields the
/// one-bit codeword "0" for its symbol: plain traversal would assign the
/// empty string, which could not be decoded. Every reachable leaf
/// receives exactly one codeword.
pub fn generate_codes(root: Option<&HuffmanNode>) -> CodeTable {
    let Some(root) = root else {
        return CodeTable::default();
    };

    let mut codes = HashMap::new();

    if let Some(symbol) = root.symbol() {
        codes.insert(symbol, "0".to_string());
        return CodeTable { codes };
    }

    let mut path = String::new();
    collect_codes(root, &mut path, &mut codes);
    CodeTable { codes }
}

fn collect_codes(node: &HuffmanNode, path: &mut String, codes: &mut HashMap<char, String>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push('0');
            collect_codes(left, path, codes);
            path.pop();

            path.push('1');
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}
