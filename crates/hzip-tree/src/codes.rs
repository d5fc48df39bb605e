//! Prefix-code table generation
//!
//! Codes are root-to-leaf paths: descending to a left child appends bit `1`,
//! to a right child bit `0`. The decoder applies the same convention in
//! reverse. Because every code ends at a distinct leaf of a strictly binary
//! tree, no code can be a prefix of another.

use crate::tree::{HuffmanNode, HuffmanTree, NodeId};
use bitvec::prelude::*;
use hzip_core::{FrequencyTable, ALPHABET_SIZE};

/// A single prefix code, most-significant (root-most) bit first
pub type Code = BitVec<u8, Msb0>;

/// Mapping from symbol to prefix code.
///
/// A plain value produced from a tree and passed explicitly to the encoder;
/// nothing here is process-global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    /// A table with no codes, used when the input had no symbols.
    pub fn empty() -> Self {
        Self {
            codes: std::array::from_fn(|_| None),
        }
    }

    /// Derive the code table from a tree by pre-order traversal.
    ///
    /// Each stack frame owns its accumulated path, so there is no shared
    /// accumulator to append to and backtrack. A one-leaf tree gets the
    /// single-bit code `0` rather than an empty code, which would break the
    /// decoder's bit-consumption loop.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::empty();

        match tree.node(tree.root()) {
            HuffmanNode::Leaf { symbol } => {
                table.codes[symbol as usize] = Some(bitvec![u8, Msb0; 0]);
            }
            HuffmanNode::Internal { .. } => {
                let mut stack: Vec<(NodeId, Code)> = vec![(tree.root(), Code::new())];
                while let Some((id, path)) = stack.pop() {
                    match tree.node(id) {
                        HuffmanNode::Leaf { symbol } => {
                            table.codes[symbol as usize] = Some(path);
                        }
                        HuffmanNode::Internal { left, right } => {
                            let mut left_path = path.clone();
                            left_path.push(true);
                            let mut right_path = path;
                            right_path.push(false);
                            stack.push((right, right_path));
                            stack.push((left, left_path));
                        }
                    }
                }
            }
        }

        table
    }

    /// The code for `symbol`, if it occurred in the source alphabet.
    pub fn code(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[symbol as usize].as_deref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.as_deref().map(|code| (s as u8, code)))
    }

    /// Total payload bit count for encoding the given frequency distribution
    /// with this table: the weighted path length of the underlying tree.
    pub fn weighted_bit_length(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .symbols()
            .map(|(symbol, count)| {
                count * self.code(symbol).map_or(0, |code| code.len() as u64)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(input: &[u8]) -> CodeTable {
        let freqs = FrequencyTable::from_bytes(input);
        let tree = HuffmanTree::build(&freqs).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_two_symbol_codes() {
        // 'b' (rarer) is the left child, coded 1; 'a' is the right, coded 0.
        let table = table_for(b"aab");
        assert_eq!(table.code(b'a').unwrap().len(), 1);
        assert!(!table.code(b'a').unwrap()[0]);
        assert_eq!(table.code(b'b').unwrap().len(), 1);
        assert!(table.code(b'b').unwrap()[0]);
        assert_eq!(table.code(b'z'), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_degenerate_single_symbol_gets_one_bit() {
        let table = table_for(b"xxxxxxxx");
        let code = table.code(b'x').unwrap();
        assert_eq!(code.len(), 1);
        assert!(!code[0]);
    }

    #[test]
    fn test_prefix_free() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");
        let codes: Vec<_> = table.iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    assert!(
                        a.len() > b.len() || *a != &b[..a.len()],
                        "code {:?} is a prefix of {:?}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_kraft_equality() {
        // A full binary code tree satisfies the Kraft inequality with
        // equality: sum over codes of 2^-len == 1.
        let table = table_for(b"abracadabra");
        let kraft: f64 = table.iter().map(|(_, c)| 0.5f64.powi(c.len() as i32)).sum();
        assert!((kraft - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_optimal_cost() {
        // Frequencies 1, 1, 2, 4 have a unique optimal cost of 14 bits
        // (lengths 3, 3, 2, 1).
        let input: Vec<u8> = [b"a".as_ref(), b"b", b"cc", b"dddd"].concat();
        let freqs = FrequencyTable::from_bytes(&input);
        let tree = HuffmanTree::build(&freqs).unwrap();
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.weighted_bit_length(&freqs), 14);
        assert_eq!(table.code(b'a').unwrap().len(), 3);
        assert_eq!(table.code(b'b').unwrap().len(), 3);
        assert_eq!(table.code(b'c').unwrap().len(), 2);
        assert_eq!(table.code(b'd').unwrap().len(), 1);
    }

    #[test]
    fn test_uniform_four_symbols_optimal() {
        // Four equally likely symbols: every code has length 2, cost 8.
        let freqs = FrequencyTable::from_bytes(b"wxyz");
        let tree = HuffmanTree::build(&freqs).unwrap();
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.weighted_bit_length(&freqs), 8);
        for (_, code) in table.iter() {
            assert_eq!(code.len(), 2);
        }
    }

    #[test]
    fn test_determinism_of_codes() {
        let freqs = FrequencyTable::from_bytes(b"mississippi river basin");
        let a = CodeTable::from_tree(&HuffmanTree::build(&freqs).unwrap());
        let b = CodeTable::from_tree(&HuffmanTree::build(&freqs).unwrap());
        assert_eq!(a, b);
    }
}
