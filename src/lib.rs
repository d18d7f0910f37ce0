//! label_qr - QR symbol encoder for retail label printing
//!
//! A self-contained, pure Rust encoder producing Version-1 QR symbols
//! (error correction level L, mask pattern 0) from short ASCII payloads.
//! No external codec library is used: GF(256) arithmetic, Reed-Solomon
//! coding, codeword assembly, and matrix layout are all implemented here.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Debug helpers (ASCII grid dump, env-gated tracing)
pub mod debug;
/// QR symbol encoding modules (field arithmetic, codewords, layout)
pub mod encoder;
/// Core data structures (Module, ModuleGrid, QrSymbol)
pub mod models;
/// Mapping of a finished symbol to drawable geometry
pub mod render;

mod config;

pub use models::{ECLevel, GRID_SIZE, MaskPattern, Module, ModuleGrid, QrSymbol};
pub use render::{QUIET_ZONE, Rect, RenderInstructions};

use encoder::layout::MatrixBuilder;
use encoder::{DATA_CODEWORDS, TOTAL_CODEWORDS, codewords, reed_solomon};

/// Encode `text` into a finalized Version-1 symbol
///
/// # Arguments
/// * `text` - Payload to encode; input longer than 17 bytes is silently
///   truncated to the first 17 (callers that must reject oversized input
///   validate length before calling)
///
/// # Returns
/// The finalized 21x21 symbol with its encoding metadata
pub fn encode_symbol(text: &str) -> QrSymbol {
    let data = codewords::assemble(text);
    let ecc = reed_solomon::rs_encode(&data);

    let mut stream = [0u8; TOTAL_CODEWORDS];
    stream[..DATA_CODEWORDS].copy_from_slice(&data);
    stream[DATA_CODEWORDS..].copy_from_slice(&ecc);

    let grid = MatrixBuilder::build(&stream);

    if debug::debug_enabled() {
        eprintln!("label_qr: data={:02X?}", data);
        eprintln!("label_qr: ecc={:02X?}", ecc);
        eprintln!("{}", debug::grid_to_ascii(&grid));
    }

    let encoded = String::from_utf8_lossy(codewords::clip_payload(text)).into_owned();
    QrSymbol::new(grid, encoded)
}

/// Encode `text` and render it at the requested pixel size
///
/// # Arguments
/// * `text` - Payload to encode (truncated to 17 bytes if longer)
/// * `size_hint` - Desired canvas size in pixels; floored at 28 and
///   rounded to a whole number of pixels per module
///
/// # Returns
/// Canvas size plus one rectangle per dark module
pub fn encode(text: &str, size_hint: usize) -> RenderInstructions {
    render::render(&encode_symbol(text), size_hint)
}

/// Encode a batch of payloads in parallel
///
/// Each symbol is computed independently (the encoder shares no mutable
/// state), so a label page renders on all cores. Output order matches
/// input order.
pub fn encode_batch(texts: &[&str], size_hint: usize) -> Vec<RenderInstructions> {
    use rayon::prelude::*;

    texts.par_iter().map(|text| encode(text, size_hint)).collect()
}

/// Encoder with a configured default rendering size
pub struct LabelEncoder {
    /// Pixel size used when no explicit hint is given
    size_hint: usize,
}

impl LabelEncoder {
    /// Create an encoder with the default size hint
    ///
    /// The default is 116 px (4 px per module including the quiet zone)
    /// and can be overridden with the `LABEL_QR_SIZE_HINT` env var.
    pub fn new() -> Self {
        Self {
            size_hint: config::default_size_hint(),
        }
    }

    /// Create an encoder with a specific size hint
    pub fn with_size_hint(size_hint: usize) -> Self {
        Self { size_hint }
    }

    /// Encode a payload at the configured size
    pub fn encode(&self, text: &str) -> RenderInstructions {
        encode(text, self.size_hint)
    }

    /// Encode a payload, stopping at the finalized module grid
    pub fn encode_symbol(&self, text: &str) -> QrSymbol {
        encode_symbol(text)
    }
}

impl Default for LabelEncoder {
    fn default() -> Self {
        Self::new()
    }
}
