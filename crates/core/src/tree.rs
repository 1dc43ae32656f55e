//! Huffman tree construction via greedy minimum-pair merging.
//!
//! The tree is a single rooted ownership structure: each internal node
//! exclusively owns its two subtrees, so there is no sharing and no
//! cycles. Once built, a tree is never mutated; re-processing new input
//! replaces it wholesale.
//!
//! # Tie-breaking
//!
//! The merge loop must pick the two lowest-frequency nodes each round.
//! Among equal frequencies it prefers the earliest-created node (leaves
//! in input order, then merged nodes in creation order), which is what
//! a repeated stable ascending sort taking the first two elements
//! produces. A min-heap ordered by (frequency, creation sequence)
//! reproduces that order exactly while staying O(n log n) overall.

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::freq::FrequencyTable;

/// A node in a Huffman tree.
///
/// Every node is either a `Leaf` holding a symbol, or an `Internal` node
/// holding exactly two children whose frequency is the sum of theirs.
/// There is never a one-child node and never a node with both a symbol
/// and children; the enum makes those states unrepresentable.
///
/// The `id` is unique within a tree and monotone in creation order
/// (leaves first, in input order, then internal nodes as they are
/// merged). It exists for external referencing, e.g. highlighting a node
/// in a rendering, and plays no part in coding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// Terminal node carrying one symbol of the alphabet
    Leaf {
        id: u32,
        symbol: char,
        frequency: u64,
    },

    /// Merged frequency group with exactly two children
    Internal {
        id: u32,
        frequency: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Node identifier, unique within its tree.
    pub fn id(&self) -> u32 {
        match self {
            HuffmanNode::Leaf { id, .. } | HuffmanNode::Internal { id, .. } => *id,
        }
    }

    /// Occurrence count for a leaf, or the sum of both subtrees for an
    /// internal node.
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { frequency, .. } | HuffmanNode::Internal { frequency, .. } => {
                *frequency
            }
        }
    }

    /// The symbol, present only on leaves.
    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// True for terminal nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Left child, absent on leaves.
    pub fn left(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, .. } => Some(left),
        }
    }

    /// Right child, absent on leaves.
    pub fn right(&self) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { right, .. } => Some(right),
        }
    }

    /// Number of levels in the subtree rooted here (1 for a leaf).
    pub fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves in the subtree rooted here.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// A tree under construction, keyed for the merge loop.
///
/// `seq` is the creation sequence number; together with the frequency it
/// defines the selection order (see module docs on tie-breaking).
struct Pending {
    frequency: u64,
    seq: u32,
    node: HuffmanNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.frequency, self.seq).cmp(&(other.frequency, other.seq))
    }
}

/// Build a Huffman tree from a frequency table.
///
/// Returns `None` for an empty table ("no data yet", not a fault).
/// A single-entry table yields a lone leaf with no merging; the code
/// generator later special-cases that into the codeword "0".
///
/// Otherwise: repeatedly remove the two lowest-frequency trees, merge
/// them under a new internal node (first selected becomes the left
/// child), and reinsert, until one tree remains. Each merge is locally
/// optimal, which by the standard Huffman argument minimizes the total
/// weighted codeword length.
pub fn build_tree(freqs: &FrequencyTable) -> Option<HuffmanNode> {
    let entries = freqs.entries();
    if entries.is_empty() {
        return None;
    }

    if entries.len() == 1 {
        return Some(HuffmanNode::Leaf {
            id: 0,
            symbol: entries[0].symbol,
            frequency: entries[0].frequency,
        });
    }

    let mut heap: BinaryHeap<Reverse<Pending>> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Reverse(Pending {
                frequency: entry.frequency,
                seq: i as u32,
                node: HuffmanNode::Leaf {
                    id: i as u32,
                    symbol: entry.symbol,
                    frequency: entry.frequency,
                },
            })
        })
        .collect();

    let mut next_id = entries.len() as u32;

    while heap.len() > 1 {
        // Both pops succeed: the loop guard guarantees two elements.
        let Reverse(first) = heap.pop()?;
        let Reverse(second) = heap.pop()?;

        let frequency = first.frequency + second.frequency;
        heap.push(Reverse(Pending {
            frequency,
            seq: next_id,
            node: HuffmanNode::Internal {
                id: next_id,
                frequency,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        }));
        next_id += 1;
    }

    heap.pop().map(|Reverse(root)| root.node)
}
