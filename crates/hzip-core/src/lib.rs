//! Core types for the hzip Huffman compression codec
//!
//! This crate provides the fundamental data structures shared by the rest of
//! the workspace: the error type, the symbol frequency table, and the
//! constants of the two on-disk artifact formats.

pub mod error;
pub mod frequency;

pub use error::{HzipError, HzipResult};
pub use frequency::FrequencyTable;

/// Size of the symbol alphabet (a symbol is one byte)
pub const ALPHABET_SIZE: usize = 256;

/// Longest possible prefix code over a 256-symbol alphabet
pub const MAX_CODE_LENGTH: usize = ALPHABET_SIZE - 1;

/// Maximum node count of a valid Huffman tree over the alphabet
/// (256 leaves plus 255 internal nodes)
pub const MAX_TREE_NODES: usize = 2 * ALPHABET_SIZE - 1;

/// Tree artifact signature
pub const TREE_MAGIC: [u8; 4] = *b"HZTR";

/// Tree artifact format version
pub const TREE_FORMAT_VERSION: u8 = 1;
