//! Error types for Huffman compression operations

use thiserror::Error;

/// Result type for compression/decompression operations
pub type HzipResult<T> = Result<T, HzipError>;

/// Errors that can occur during compression/decompression
#[derive(Error, Debug)]
pub enum HzipError {
    #[error("Input contains no symbols")]
    InputExhausted,

    #[error("Corrupt tree artifact: {0}")]
    CorruptTree(String),

    #[error("Corrupt bit payload: {0}")]
    CorruptPayload(String),

    #[error("No code for symbol {0:#04x}")]
    SymbolNotEncodable(u8),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unexpected end of stream")]
    UnexpectedEndOfStream,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
