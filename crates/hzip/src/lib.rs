//! # hzip - Huffman compression codec
//!
//! Lossless compression and decompression of byte sequences with Huffman
//! coding. Compression produces two artifacts: the bit payload (a 32-bit
//! big-endian bit count followed by the packed code bits) and a canonical
//! serialization of the Huffman tree, which the decoder reconstructs
//! independently.
//!
//! ## Quick start
//!
//! ```
//! let data = b"how much wood would a woodchuck chuck";
//!
//! let compressed = hzip::compress(data).unwrap();
//! let restored = hzip::decompress(&compressed.payload, &compressed.tree).unwrap();
//!
//! assert_eq!(restored, data);
//! ```
//!
//! All state is local to a single call: the frequency table, tree, and code
//! table are values created per invocation, so concurrent compressions in
//! one process never share or race on anything.

// Re-export core types
pub use hzip_core::{FrequencyTable, HzipError, HzipResult};

// Re-export the codec building blocks
pub use hzip_decoder::HuffmanDecoder;
pub use hzip_encoder::HuffmanEncoder;
pub use hzip_tree::{read_tree, write_tree, CodeTable, HuffmanNode, HuffmanTree};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The two artifacts produced by one compression run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// Bit-payload artifact: 32-bit big-endian bit count + packed code bits
    pub payload: Vec<u8>,
    /// Canonical tree artifact
    pub tree: Vec<u8>,
}

/// Compress a symbol sequence into its payload and tree artifacts.
///
/// Empty input is well-defined: it produces the empty-tree artifact and a
/// zero-bit payload, which round-trip back to empty output.
pub fn compress(input: &[u8]) -> HzipResult<Compressed> {
    let freqs = FrequencyTable::from_bytes(input);

    let (tree, table) = if freqs.is_empty() {
        (None, CodeTable::empty())
    } else {
        let tree = HuffmanTree::build(&freqs)?;
        let table = CodeTable::from_tree(&tree);
        (Some(tree), table)
    };

    let mut tree_artifact = Vec::new();
    write_tree(tree.as_ref(), &mut tree_artifact)?;

    let mut payload = Vec::new();
    HuffmanEncoder::new(&table).encode(input, &mut payload)?;

    Ok(Compressed {
        payload,
        tree: tree_artifact,
    })
}

/// Decompress a payload artifact against its tree artifact.
pub fn decompress(payload: &[u8], tree: &[u8]) -> HzipResult<Vec<u8>> {
    let tree = read_tree(tree)?;
    HuffmanDecoder::new(tree).decode(payload)
}
