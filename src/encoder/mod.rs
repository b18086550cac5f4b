//! Symbol encoding: segmentation, codeword assembly, error correction,
//! module placement, and mask selection

pub mod bch;
pub mod bitstream;
pub mod galois;
pub mod mask;
pub mod placement;
pub mod qr_encoder;
pub mod segment;
pub mod structure;
pub mod tables;

pub use qr_encoder::{DEFAULT_QUIET_ZONE, QrEncoder};
