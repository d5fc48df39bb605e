//! Canonical tree artifact serialization
//!
//! The tree artifact replaces the frequency table between the encode and
//! decode invocations, so it must round-trip the tree shape and leaf symbols
//! exactly. Layout:
//!
//! - 4-byte magic `HZTR`
//! - 1-byte format version
//! - 1-byte presence flag: `0` = empty tree (empty input), `1` = tree follows
//! - pre-order bit stream: internal node = bit `0` followed by its left then
//!   right subtree; leaf = bit `1` followed by the 8 symbol bits. The final
//!   byte is zero-padded.
//!
//! Frequencies are not persisted; the decoder only needs shape and symbols.

use crate::tree::{HuffmanNode, HuffmanTree, NodeId};
use hzip_bitstream::{BitReader, BitWriter};
use hzip_core::{HzipError, HzipResult, MAX_CODE_LENGTH, MAX_TREE_NODES};
use hzip_core::{TREE_FORMAT_VERSION, TREE_MAGIC};
use std::io::{Read, Write};

/// Serialize a tree (or the empty-tree marker) to `writer`.
pub fn write_tree<W: Write>(tree: Option<&HuffmanTree>, mut writer: W) -> HzipResult<()> {
    writer.write_all(&TREE_MAGIC)?;
    writer.write_all(&[TREE_FORMAT_VERSION])?;

    match tree {
        None => writer.write_all(&[0])?,
        Some(tree) => {
            writer.write_all(&[1])?;
            let mut bits = BitWriter::new(writer);
            write_node(tree, tree.root(), &mut bits)?;
            bits.flush()?;
        }
    }

    Ok(())
}

fn write_node<W: Write>(
    tree: &HuffmanTree,
    id: NodeId,
    bits: &mut BitWriter<W>,
) -> HzipResult<()> {
    match tree.node(id) {
        HuffmanNode::Leaf { symbol } => {
            bits.write_bit(true)?;
            bits.write_bits(symbol as u64, 8)?;
        }
        HuffmanNode::Internal { left, right } => {
            bits.write_bit(false)?;
            write_node(tree, left, bits)?;
            write_node(tree, right, bits)?;
        }
    }
    Ok(())
}

/// Reconstruct a tree from its artifact.
///
/// Structurally invalid input (bad magic, unknown version, truncation, a
/// tree deeper or larger than the byte alphabet allows) is rejected with
/// [`HzipError::CorruptTree`].
pub fn read_tree<R: Read>(mut reader: R) -> HzipResult<Option<HuffmanTree>> {
    let mut header = [0u8; 6];
    reader
        .read_exact(&mut header)
        .map_err(|_| HzipError::CorruptTree("artifact shorter than header".to_string()))?;

    if header[..4] != TREE_MAGIC {
        return Err(HzipError::CorruptTree("bad signature".to_string()));
    }
    if header[4] != TREE_FORMAT_VERSION {
        return Err(HzipError::CorruptTree(format!(
            "unsupported format version {}",
            header[4]
        )));
    }

    match header[5] {
        0 => Ok(None),
        1 => {
            let mut bits = BitReader::new(reader);
            let mut nodes = Vec::new();
            let root = read_node(&mut bits, &mut nodes, 0)?;
            Ok(Some(HuffmanTree { nodes, root }))
        }
        flag => Err(HzipError::CorruptTree(format!(
            "invalid presence flag {flag}"
        ))),
    }
}

fn read_node<R: Read>(
    bits: &mut BitReader<R>,
    nodes: &mut Vec<HuffmanNode>,
    depth: usize,
) -> HzipResult<NodeId> {
    if depth > MAX_CODE_LENGTH {
        return Err(HzipError::CorruptTree(
            "tree deeper than the maximum code length".to_string(),
        ));
    }
    if nodes.len() >= MAX_TREE_NODES {
        return Err(HzipError::CorruptTree(
            "tree larger than the byte alphabet allows".to_string(),
        ));
    }

    if read_or_truncated(bits.read_bit())? {
        let symbol = read_or_truncated(bits.read_bits(8))? as u8;
        nodes.push(HuffmanNode::Leaf { symbol });
    } else {
        let left = read_node(bits, nodes, depth + 1)?;
        let right = read_node(bits, nodes, depth + 1)?;
        nodes.push(HuffmanNode::Internal { left, right });
    }
    Ok(nodes.len() - 1)
}

fn read_or_truncated<T>(result: HzipResult<T>) -> HzipResult<T> {
    result.map_err(|err| match err {
        HzipError::UnexpectedEndOfStream => {
            HzipError::CorruptTree("truncated tree artifact".to_string())
        }
        other => other,
    })
}
