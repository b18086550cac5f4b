//! Input segmentation: the encoder always emits a single ECI-UTF-8 byte-mode
//! segment, so segmentation reduces to taking the input's UTF-8 bytes and
//! sizing the headers for each character-count width class.

use crate::models::Version;

/// Combined ECI designator (UTF-8, assignment 26) and byte mode indicator,
/// emitted as one 16-bit header before the character count
pub const ECI_UTF8_HEADER: u32 = 0b0111_0001_1010_0100;

/// Character-count field width class, set by the version thresholds 10 and 27
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    /// Versions 1-9: 8-bit byte count
    Short,
    /// Versions 10-26: 16-bit byte count
    Mid,
    /// Versions 27-40: 16-bit byte count
    Long,
}

impl LengthClass {
    /// Smallest version using the mid-width count field
    pub const MID_THRESHOLD: u8 = 10;
    /// Smallest version using the long-width count field
    pub const LONG_THRESHOLD: u8 = 27;

    /// The width class a given version uses
    pub fn for_version(version: Version) -> Self {
        match version.number() {
            n if n >= Self::LONG_THRESHOLD => LengthClass::Long,
            n if n >= Self::MID_THRESHOLD => LengthClass::Mid,
            _ => LengthClass::Short,
        }
    }

    /// Width of the byte-mode character count field in bits
    pub fn count_bits(self) -> u32 {
        match self {
            LengthClass::Short => 8,
            LengthClass::Mid | LengthClass::Long => 16,
        }
    }
}

/// One run of encoded bytes.
///
/// Rust strings are valid UTF-8 by construction, so the byte payload is the
/// input's bytes as-is; astral codepoints arrive as their proper 4-byte
/// sequences and malformed surrogate halves cannot occur.
#[derive(Debug, Clone)]
pub struct Segment {
    bytes: Vec<u8>,
}

impl Segment {
    /// Segment the input text for encoding
    pub fn from_text(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// The raw UTF-8 payload
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total encoded bit length under a count-field width class:
    /// 16 header bits, the count field, then 8 bits per byte
    pub fn bit_length(&self, class: LengthClass) -> usize {
        16 + class.count_bits() as usize + 8 * self.bytes.len()
    }
}
