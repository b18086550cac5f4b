//! qr-svg - QR code symbol encoder with SVG path output
//!
//! A pure Rust QR Code (ISO/IEC 18004, Model 2) encoder. Input text is
//! carried as UTF-8 in a single ECI byte-mode segment, the smallest fitting
//! version is chosen automatically, and the finished symbol comes back with
//! its dark modules run-length encoded as SVG path data alongside the raw
//! module grid.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding pipeline (segmentation, error correction, placement, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (BitCanvas, BitMatrix, Symbol, etc.)
pub mod models;
/// SVG and raster output
pub mod render;

pub use encoder::{DEFAULT_QUIET_ZONE, QrEncoder};
pub use error::{EncodeError, EncodeResult};
pub use models::{BitCanvas, BitMatrix, ECLevel, MaskPattern, Module, Symbol, Version};

/// Encode `text` at the given error correction level with the standard
/// quiet zone
///
/// # Example
/// ```
/// use qr_svg::ECLevel;
///
/// let symbol = qr_svg::encode(ECLevel::M, "https://example.com").unwrap();
/// let svg = qr_svg::render::to_svg(&symbol);
/// assert!(svg.starts_with("<svg "));
/// ```
pub fn encode(level: ECLevel, text: &str) -> EncodeResult<Symbol> {
    QrEncoder::new(level).encode(text)
}
