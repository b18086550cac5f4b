//! Capacity and error correction block tables for every version and level

use crate::models::{ECLevel, Version};

/// Error correction block layout for one (version, level) pair
pub struct EcBlockInfo {
    /// Number of Reed-Solomon blocks the codewords are striped across
    pub num_blocks: usize,
    /// Parity codewords per block
    pub ecc_per_block: usize,
}

// Tables from the QR Code specification (Model 2).
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Block layout for a version and level
pub fn ec_block_info(version: Version, level: ECLevel) -> EcBlockInfo {
    let idx = level.table_index();
    let v = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Number of modules available to codewords: the full grid minus finder,
/// separator, timing, alignment, format and version areas
pub fn num_raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Total codewords a version carries (data plus parity); up to 7 leftover
/// remainder bits are dropped
pub fn total_codewords(version: Version) -> usize {
    num_raw_data_modules(version) / 8
}

/// Data codewords available at a version and level
pub fn data_codewords(version: Version, level: ECLevel) -> usize {
    let info = ec_block_info(version, level);
    total_codewords(version) - info.num_blocks * info.ecc_per_block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_raw_module_counts() {
        assert_eq!(num_raw_data_modules(v(1)), 208);
        assert_eq!(num_raw_data_modules(v(2)), 359);
        assert_eq!(num_raw_data_modules(v(7)), 1568);
        assert_eq!(num_raw_data_modules(v(40)), 29648);
    }

    #[test]
    fn test_total_codewords() {
        assert_eq!(total_codewords(v(1)), 26);
        assert_eq!(total_codewords(v(2)), 44);
        assert_eq!(total_codewords(v(5)), 134);
        assert_eq!(total_codewords(v(40)), 3706);
    }

    #[test]
    fn test_data_codewords_per_level() {
        assert_eq!(data_codewords(v(1), ECLevel::L), 19);
        assert_eq!(data_codewords(v(1), ECLevel::M), 16);
        assert_eq!(data_codewords(v(1), ECLevel::Q), 13);
        assert_eq!(data_codewords(v(1), ECLevel::H), 9);
        assert_eq!(data_codewords(v(2), ECLevel::L), 34);
        assert_eq!(data_codewords(v(5), ECLevel::Q), 62);
        assert_eq!(data_codewords(v(40), ECLevel::L), 2956);
    }

    #[test]
    fn test_parity_never_exceeds_total() {
        for number in 1..=40 {
            for level in ECLevel::ALL {
                let info = ec_block_info(v(number), level);
                assert!(info.num_blocks >= 1);
                assert!(info.ecc_per_block * info.num_blocks < total_codewords(v(number)));
            }
        }
    }
}
