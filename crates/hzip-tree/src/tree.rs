//! Huffman tree construction
//!
//! The tree is stored as an arena of nodes referenced by index, which keeps
//! ownership flat and makes the pre-order artifact serialization a simple
//! walk over handles.

use hzip_core::{FrequencyTable, HzipError, HzipResult};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Handle to a node in a [`HuffmanTree`] arena
pub type NodeId = usize;

/// A node in a strictly binary Huffman tree.
///
/// Only leaves carry a symbol; internal nodes always have exactly two
/// children, so one-child internals are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf { symbol: u8 },
    Internal { left: NodeId, right: NodeId },
}

/// An immutable Huffman tree over the byte alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub(crate) nodes: Vec<HuffmanNode>,
    pub(crate) root: NodeId,
}

impl HuffmanTree {
    /// Build a weighted-path-length-minimal tree from a frequency table.
    ///
    /// Leaves are seeded into a minimum-priority queue in ascending symbol
    /// order; the two lowest-frequency nodes are repeatedly merged, the
    /// first extracted becoming the left child and the second the right.
    /// Ties on frequency resolve by insertion order (a monotone sequence
    /// number), so identical inputs always produce identical trees.
    ///
    /// An empty table is rejected with [`HzipError::InputExhausted`]; a
    /// single distinct symbol yields a one-leaf tree.
    pub fn build(freqs: &FrequencyTable) -> HzipResult<Self> {
        if freqs.is_empty() {
            return Err(HzipError::InputExhausted);
        }

        let mut nodes = Vec::with_capacity(2 * freqs.distinct_symbols() - 1);
        let mut heap = BinaryHeap::new();
        let mut seq = 0usize;

        for (symbol, count) in freqs.symbols() {
            nodes.push(HuffmanNode::Leaf { symbol });
            heap.push(Reverse((count, seq, nodes.len() - 1)));
            seq += 1;
        }

        while heap.len() >= 2 {
            let Reverse((left_freq, _, left)) = heap.pop().unwrap();
            let Reverse((right_freq, _, right)) = heap.pop().unwrap();
            nodes.push(HuffmanNode::Internal { left, right });
            heap.push(Reverse((left_freq + right_freq, seq, nodes.len() - 1)));
            seq += 1;
        }

        let Reverse((_, _, root)) = heap.pop().unwrap();
        Ok(Self { nodes, root })
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> HuffmanNode {
        self.nodes[id]
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaf nodes, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, HuffmanNode::Leaf { .. }))
            .count()
    }
}
