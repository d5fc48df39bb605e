//! Huffman tree construction, prefix-code derivation, and the canonical
//! tree artifact for the hzip codec.

pub mod artifact;
pub mod codes;
pub mod tree;

pub use artifact::{read_tree, write_tree};
pub use codes::{Code, CodeTable};
pub use tree::{HuffmanNode, HuffmanTree, NodeId};
