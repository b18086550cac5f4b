//! Symbol-level types: version, error correction level, mask pattern, and
//! the finished symbol

use std::fmt;
use std::str::FromStr;

use super::BitMatrix;
use crate::error::EncodeError;

/// QR Code symbol version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol version
    pub const MIN: Version = Version(1);
    /// Largest symbol version
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        if (1..=40).contains(&number) {
            Some(Version(number))
        } else {
            None
        }
    }

    /// Get the version number (1-40)
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn side_length(self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Versions 7 and up carry the 18-bit version information blocks
    pub fn shows_version_info(self) -> bool {
        self.0 >= 7
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All four levels, weakest first
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Index into the per-level capacity tables (L=0, M=1, Q=2, H=3)
    pub fn table_index(self) -> usize {
        self as usize
    }

    /// The 2-bit value stored in the format information.
    /// The wire order (M=00, L=01, H=10, Q=11) does not follow the
    /// quality order, it is just how the spec numbers them.
    pub fn format_bits(self) -> u8 {
        match self {
            ECLevel::M => 0b00,
            ECLevel::L => 0b01,
            ECLevel::H => 0b10,
            ECLevel::Q => 0b11,
        }
    }

    /// Single-letter code for this level
    pub fn code(self) -> &'static str {
        match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        }
    }
}

impl FromStr for ECLevel {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            other => Err(EncodeError::InvalidLevel(other.to_string())),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight candidates in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit id
    pub fn from_bits(bits: u8) -> Option<Self> {
        MaskPattern::ALL.get((bits & 0x07) as usize).copied()
    }

    /// Mask id (0-7)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Check if the module at row `i`, column `j` gets flipped by this mask
    pub fn is_masked(self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// A fully encoded QR symbol
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Chosen symbol version
    pub version: Version,
    /// Error correction level the symbol was encoded at
    pub ec_level: ECLevel,
    /// Winning mask pattern
    pub mask: MaskPattern,
    /// Total width/height in modules, quiet zone included.
    /// Use this for the SVG `viewBox`.
    pub side_length: usize,
    /// SVG path data: space-separated `M<x> <y>.5 h<len>` commands, one per
    /// horizontal run of dark modules, offset by the quiet zone
    pub path: String,
    /// Final module grid (true = dark), without the quiet zone
    pub modules: BitMatrix,
}

impl Symbol {
    /// Quiet zone width in modules on each side
    pub fn quiet_zone(&self) -> usize {
        (self.side_length - self.modules.width()) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_side_length() {
        assert_eq!(Version::new(1).unwrap().side_length(), 21);
        assert_eq!(Version::new(2).unwrap().side_length(), 25);
        assert_eq!(Version::new(40).unwrap().side_length(), 177);
        assert!(Version::new(0).is_none());
        assert!(Version::new(41).is_none());
    }

    #[test]
    fn test_version_info_threshold() {
        assert!(!Version::new(6).unwrap().shows_version_info());
        assert!(Version::new(7).unwrap().shows_version_info());
    }

    #[test]
    fn test_ec_level_parse() {
        assert_eq!("L".parse::<ECLevel>().unwrap(), ECLevel::L);
        assert_eq!("H".parse::<ECLevel>().unwrap(), ECLevel::H);
        assert!("X".parse::<ECLevel>().is_err());
        assert!("l".parse::<ECLevel>().is_err());
        assert!("".parse::<ECLevel>().is_err());
    }

    #[test]
    fn test_ec_level_format_bits() {
        assert_eq!(ECLevel::M.format_bits(), 0b00);
        assert_eq!(ECLevel::L.format_bits(), 0b01);
        assert_eq!(ECLevel::H.format_bits(), 0b10);
        assert_eq!(ECLevel::Q.format_bits(), 0b11);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        assert_eq!(MaskPattern::from_bits(5), Some(MaskPattern::Pattern5));
        for (i, mask) in MaskPattern::ALL.iter().enumerate() {
            assert_eq!(mask.id() as usize, i);
        }
    }
}
