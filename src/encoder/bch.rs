//! BCH error correction for the format and version information fields

use crate::models::{ECLevel, MaskPattern, Version};

/// Format info generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0b101_0011_0111;

/// Version info generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0b1_1111_0010_0101;

/// Fixed pattern XORed into format codewords so no valid format is all zero
pub const FORMAT_XOR_MASK: u32 = 0b101_0100_0001_0010;

/// Append `2 * num_data_bits` BCH remainder bits below the data bits.
///
/// The remainder is the data polynomial shifted up, reduced by the generator
/// with a compare-and-XOR loop (a difference smaller than the running
/// remainder means the generator's top bit lined up with a set bit).
pub fn add_error_correction(data: u32, num_data_bits: u32, generator: u32) -> u32 {
    let mut remainder = data << (2 * num_data_bits);
    for i in (0..=num_data_bits).rev() {
        let difference = remainder ^ (generator << i);
        if difference < remainder {
            remainder = difference;
        }
    }
    (data << (2 * num_data_bits)) | remainder
}

/// The 15-bit format codeword for a level/mask pair: 5 data bits
/// (EC bits << 3 | mask id), 10 BCH bits, then the fixed XOR pattern
pub fn format_value(level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((level.format_bits() as u32) << 3) | mask.id() as u32;
    (add_error_correction(data, 5, FORMAT_GENERATOR) ^ FORMAT_XOR_MASK) as u16
}

/// The 18-bit version codeword: 6 data bits plus 12 BCH bits (versions 7+)
pub fn version_value(version: Version) -> u32 {
    add_error_correction(version.number() as u32, 6, VERSION_GENERATOR)
}
