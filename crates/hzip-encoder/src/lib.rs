//! Huffman payload encoder
//!
//! Produces the bit-payload artifact: a 32-bit big-endian count of payload
//! bits, followed by the packed code bits of every input symbol in order,
//! most-significant bit first, with the final partial byte zero-padded.
//! The tree artifact is persisted separately by the caller.

use bitvec::prelude::*;
use byteorder::{BigEndian, WriteBytesExt};
use hzip_bitstream::BitWriter;
use hzip_core::{HzipError, HzipResult};
use hzip_tree::CodeTable;
use std::io::Write;

/// Encoder for one symbol sequence against an explicit code table.
///
/// The table is borrowed per call; two encoders in one process never share
/// state.
pub struct HuffmanEncoder<'a> {
    table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(table: &'a CodeTable) -> Self {
        Self { table }
    }

    /// Encode `input` into `writer`, returning the payload bit count.
    ///
    /// A symbol without a code is an internal inconsistency between the
    /// frequency pass and the code table; it fails with
    /// [`HzipError::SymbolNotEncodable`] before anything is written, never
    /// silently skipping (which would desynchronize decode). A payload
    /// exceeding the 32-bit header range is rejected as well.
    pub fn encode<W: Write>(&self, input: &[u8], mut writer: W) -> HzipResult<u64> {
        let bit_len = self.payload_bit_length(input)?;
        if bit_len > u32::MAX as u64 {
            return Err(HzipError::EncodingError(format!(
                "payload of {bit_len} bits exceeds the 32-bit length header"
            )));
        }

        writer.write_u32::<BigEndian>(bit_len as u32)?;

        let mut bits = BitWriter::new(writer);
        for &symbol in input {
            let code = self.code_for(symbol)?;
            for bit in code.iter().by_vals() {
                bits.write_bit(bit)?;
            }
        }
        bits.flush()?;

        Ok(bit_len)
    }

    /// Exact bit count of the encoded payload for `input`.
    pub fn payload_bit_length(&self, input: &[u8]) -> HzipResult<u64> {
        let mut bit_len = 0u64;
        for &symbol in input {
            bit_len += self.code_for(symbol)?.len() as u64;
        }
        Ok(bit_len)
    }

    fn code_for(&self, symbol: u8) -> HzipResult<&BitSlice<u8, Msb0>> {
        self.table
            .code(symbol)
            .ok_or(HzipError::SymbolNotEncodable(symbol))
    }
}
