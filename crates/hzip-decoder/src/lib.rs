//! Huffman payload decoder
//!
//! Walks the reconstructed tree one payload bit at a time: bit 1 descends to
//! the left child, bit 0 to the right (the mirror of code derivation).
//! Reaching a leaf emits its symbol and resets the walk to the root.
//!
//! The 32-bit length header is the authoritative termination bound: exactly
//! that many bits are consumed and the zero padding in the final byte is
//! never interpreted. Relying on end-of-stream instead would decode padding
//! into spurious symbols whenever zero bits form a valid code path.

use byteorder::{BigEndian, ReadBytesExt};
use hzip_bitstream::BitReader;
use hzip_core::{HzipError, HzipResult};
use hzip_tree::{HuffmanNode, HuffmanTree};
use std::io::Read;

/// Decoder owning the tree reconstructed from the tree artifact.
///
/// `None` represents the empty tree written for empty input; it only accepts
/// a zero-bit payload.
pub struct HuffmanDecoder {
    tree: Option<HuffmanTree>,
}

impl HuffmanDecoder {
    pub fn new(tree: Option<HuffmanTree>) -> Self {
        Self { tree }
    }

    /// Decode one bit-payload artifact into the original symbol sequence.
    pub fn decode<R: Read>(&self, mut reader: R) -> HzipResult<Vec<u8>> {
        let bit_len = reader.read_u32::<BigEndian>().map_err(|_| {
            HzipError::CorruptPayload("payload shorter than the length header".to_string())
        })? as u64;

        let Some(tree) = &self.tree else {
            if bit_len == 0 {
                return Ok(Vec::new());
            }
            return Err(HzipError::CorruptPayload(format!(
                "{bit_len} payload bits declared for an empty tree"
            )));
        };

        let mut bits = BitReader::new(reader);
        let mut output = Vec::new();
        let root = tree.root();
        let mut current = root;

        for consumed in 0..bit_len {
            let bit = bits.read_bit().map_err(|err| match err {
                HzipError::UnexpectedEndOfStream => HzipError::CorruptPayload(format!(
                    "length header declares {bit_len} bits but the payload ends after {consumed}"
                )),
                other => other,
            })?;

            if let HuffmanNode::Internal { left, right } = tree.node(current) {
                current = if bit { left } else { right };
            }
            // A one-leaf tree stays at the root and emits per consumed bit.
            if let HuffmanNode::Leaf { symbol } = tree.node(current) {
                output.push(symbol);
                current = root;
            }
        }

        if current != root {
            return Err(HzipError::CorruptPayload(
                "payload ends in the middle of a code".to_string(),
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hzip_core::FrequencyTable;
    use hzip_tree::CodeTable;

    fn tree_for(input: &[u8]) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::from_bytes(input)).unwrap()
    }

    #[test]
    fn test_decode_known_payload() {
        // "aab" yields a = 0, b = 1; payload "001" with header 3.
        let decoder = HuffmanDecoder::new(Some(tree_for(b"aab")));
        let payload = [0, 0, 0, 3, 0b00100000];
        assert_eq!(decoder.decode(payload.as_slice()).unwrap(), b"aab");
    }

    #[test]
    fn test_header_bounds_decoding() {
        // Tree for "aabc": a = 1, b = 01, c = 00. The payload bits "101"
        // decode to "ab"; unbounded decoding of the padded byte
        // 0b1010_0000 would keep going and emit two spurious 'c's.
        let tree = tree_for(b"aabc");
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.code(b'a').unwrap().len(), 1);
        assert_eq!(table.code(b'b').unwrap().len(), 2);
        assert_eq!(table.code(b'c').unwrap().len(), 2);

        let decoder = HuffmanDecoder::new(Some(tree));
        let payload = [0, 0, 0, 3, 0b10100000];
        assert_eq!(decoder.decode(payload.as_slice()).unwrap(), b"ab");
    }

    #[test]
    fn test_header_exceeding_payload_rejected() {
        let decoder = HuffmanDecoder::new(Some(tree_for(b"aab")));
        // Header claims 100 bits; only one payload byte follows.
        let payload = [0, 0, 0, 100, 0b00100000];
        assert!(matches!(
            decoder.decode(payload.as_slice()),
            Err(HzipError::CorruptPayload(_))
        ));
    }

    #[test]
    fn test_mid_code_termination_rejected() {
        // Tree for "aabc": b = 01. A single declared bit of 0 descends to
        // the internal right child and stops mid-code.
        let decoder = HuffmanDecoder::new(Some(tree_for(b"aabc")));
        let payload = [0, 0, 0, 1, 0b00000000];
        assert!(matches!(
            decoder.decode(payload.as_slice()),
            Err(HzipError::CorruptPayload(_))
        ));
    }

    #[test]
    fn test_missing_header_rejected() {
        let decoder = HuffmanDecoder::new(Some(tree_for(b"aab")));
        let payload = [0, 0];
        assert!(matches!(
            decoder.decode(payload.as_slice()),
            Err(HzipError::CorruptPayload(_))
        ));
    }

    #[test]
    fn test_degenerate_single_symbol() {
        let decoder = HuffmanDecoder::new(Some(tree_for(b"eeee")));
        let payload = [0, 0, 0, 4, 0x00];
        assert_eq!(decoder.decode(payload.as_slice()).unwrap(), b"eeee");
    }

    #[test]
    fn test_empty_tree_accepts_only_zero_bits() {
        let decoder = HuffmanDecoder::new(None);
        assert_eq!(decoder.decode([0, 0, 0, 0].as_slice()).unwrap(), b"");
        assert!(matches!(
            decoder.decode([0, 0, 0, 5, 0xFF].as_slice()),
            Err(HzipError::CorruptPayload(_))
        ));
    }
}
