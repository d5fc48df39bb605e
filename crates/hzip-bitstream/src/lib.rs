//! Bit-level stream I/O for the hzip codec
//!
//! Both the compressed payload and the tree artifact are bit streams packed
//! most-significant-bit first into bytes; this crate provides the reader and
//! writer they share.

pub mod bitreader;
pub mod bitwriter;

pub use bitreader::BitReader;
pub use bitwriter::BitWriter;
