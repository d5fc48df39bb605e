//! Bitstream writer implementation

use hzip_core::{HzipError, HzipResult};
use std::io::Write;

/// A bitstream writer for writing individual bits to a byte stream.
///
/// Bits are packed most-significant-bit first within each byte; [`flush`]
/// zero-pads the final partial byte.
///
/// [`flush`]: BitWriter::flush
pub struct BitWriter<W: Write> {
    writer: W,
    buffer: u32,
    bits_in_buffer: usize,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Write a single bit.
    pub fn write_bit(&mut self, bit: bool) -> HzipResult<()> {
        self.buffer = (self.buffer << 1) | bit as u32;
        self.bits_in_buffer += 1;

        if self.bits_in_buffer == 8 {
            self.writer.write_all(&[self.buffer as u8])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }

        Ok(())
    }

    /// Write up to 64 bits to the stream, most-significant bit first.
    pub fn write_bits(&mut self, value: u64, num_bits: usize) -> HzipResult<()> {
        if num_bits > 64 {
            return Err(HzipError::InvalidParameter(
                "Cannot write more than 64 bits at once".to_string(),
            ));
        }

        for i in (0..num_bits).rev() {
            self.write_bit((value >> i) & 1 != 0)?;
        }
        Ok(())
    }

    /// Zero-pad the final partial byte, write it out, and flush the
    /// underlying writer.
    pub fn flush(&mut self) -> HzipResult<()> {
        if self.bits_in_buffer > 0 {
            self.buffer <<= 8 - self.bits_in_buffer;
            self.writer.write_all(&[self.buffer as u8])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
