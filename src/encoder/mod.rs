//! QR symbol encoding modules
//!
//! This module contains all the logic for producing a Version-1 symbol:
//! - GF(256) field arithmetic and Reed-Solomon error correction
//! - Data codeword assembly (mode, length, payload, padding)
//! - Matrix layout (function patterns, zigzag data placement, masking)
//! - BCH-protected format information

/// Data codeword assembly (mode indicator, length, payload, padding)
pub mod codewords;
/// BCH(15,5) format information encoding and placement
pub mod format;
/// GF(256) field arithmetic (exp/log tables)
pub mod galois;
/// Matrix layout engine (function patterns, reserved cells, data placement)
pub mod layout;
/// Reed-Solomon error correction codeword generation
pub mod reed_solomon;

/// Symbol version produced by this encoder
pub const VERSION: u8 = 1;
/// Data codewords in a Version-1/L symbol
pub const DATA_CODEWORDS: usize = 19;
/// Error correction codewords in a Version-1/L symbol
pub const ECC_CODEWORDS: usize = 7;
/// Total codewords placed into the matrix
pub const TOTAL_CODEWORDS: usize = DATA_CODEWORDS + ECC_CODEWORDS;
/// Byte-mode payload capacity; longer input is silently truncated
pub const CAPACITY_BYTES: usize = 17;
