//! Bitstream reader implementation

use hzip_core::{HzipError, HzipResult};
use std::io::Read;

/// A bitstream reader for reading individual bits from a byte stream.
///
/// Bits are consumed most-significant-bit first within each byte.
pub struct BitReader<R: Read> {
    reader: R,
    buffer: u32,
    bits_in_buffer: usize,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Read a single bit.
    ///
    /// Returns [`HzipError::UnexpectedEndOfStream`] when the underlying byte
    /// source is exhausted; callers translate that into the corruption error
    /// appropriate for the artifact being decoded.
    pub fn read_bit(&mut self) -> HzipResult<bool> {
        if self.bits_in_buffer == 0 {
            let mut byte = [0u8; 1];
            if self.reader.read(&mut byte)? == 0 {
                return Err(HzipError::UnexpectedEndOfStream);
            }
            self.buffer = byte[0] as u32;
            self.bits_in_buffer = 8;
        }

        let bit = (self.buffer >> (self.bits_in_buffer - 1)) & 1;
        self.bits_in_buffer -= 1;
        Ok(bit != 0)
    }

    /// Read up to 64 bits from the stream, most-significant bit first.
    pub fn read_bits(&mut self, num_bits: usize) -> HzipResult<u64> {
        if num_bits > 64 {
            return Err(HzipError::InvalidParameter(
                "Cannot read more than 64 bits at once".to_string(),
            ));
        }

        let mut result = 0u64;
        for _ in 0..num_bits {
            result = (result << 1) | self.read_bit()? as u64;
        }
        Ok(result)
    }
}
