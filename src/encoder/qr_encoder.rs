//! The encoding pipeline: version selection, codeword assembly, placement,
//! masking, and path generation

use crate::error::{EncodeError, EncodeResult};
use crate::models::{BitCanvas, ECLevel, Symbol, Version};

use super::bitstream::encode_data;
use super::galois::ReedSolomonEncoder;
use super::mask::select_mask;
use super::placement::ZigZagWriter;
use super::segment::{LengthClass, Segment};
use super::structure::{build_skeleton, write_format_bits};
use super::tables::{data_codewords, ec_block_info};

/// Quiet zone width the standard asks for
pub const DEFAULT_QUIET_ZONE: usize = 4;

/// One error correction block: where its data codewords start in the
/// serialized stream, and its parity codewords
struct Block {
    start: usize,
    parity: Vec<u8>,
}

/// QR symbol encoder for one error correction level
#[derive(Debug, Clone)]
pub struct QrEncoder {
    level: ECLevel,
    quiet_zone: usize,
}

impl QrEncoder {
    /// Create an encoder at the given error correction level
    pub fn new(level: ECLevel) -> Self {
        Self {
            level,
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }

    /// Override the quiet zone width (modules on each side)
    pub fn with_quiet_zone(mut self, quiet_zone: usize) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// The error correction level this encoder targets
    pub fn level(&self) -> ECLevel {
        self.level
    }

    /// Encode `text` into a symbol at the smallest version that fits.
    ///
    /// The output is deterministic: equal inputs produce identical symbols.
    pub fn encode(&self, text: &str) -> EncodeResult<Symbol> {
        let segment = Segment::from_text(text);
        let (version, num_data_bytes) = self.choose_version(&segment)?;

        let class = LengthClass::for_version(version);
        let encoded = encode_data(num_data_bytes, class, &segment);

        let info = ec_block_info(version, self.level);
        let rs = ReedSolomonEncoder::new(info.ecc_per_block);

        // Short blocks come first; the last `num_data_bytes % num_blocks`
        // blocks carry one extra data codeword
        let per_block = num_data_bytes / info.num_blocks;
        let overflow_index = info.num_blocks - num_data_bytes % info.num_blocks;
        let mut blocks = Vec::with_capacity(info.num_blocks);
        for i in 0..info.num_blocks {
            let start = i * per_block + i.saturating_sub(overflow_index);
            let length = per_block + usize::from(i >= overflow_index);
            blocks.push(Block {
                start,
                parity: rs.remainder(&encoded[start..start + length]),
            });
        }

        let mut canvas = build_skeleton(version);
        write_format_bits(&mut canvas, self.level);

        place_codewords(&mut canvas, &encoded, &blocks, num_data_bytes, per_block);

        let (mask, _) = select_mask(&canvas);
        let path = canvas.make_path(self.quiet_zone, self.quiet_zone, |x, y| {
            canvas.dark(x, y, mask)
        });

        Ok(Symbol {
            version,
            ec_level: self.level,
            mask,
            side_length: version.side_length() + 2 * self.quiet_zone,
            path,
            modules: canvas.resolve(mask),
        })
    }

    /// Smallest version whose data capacity holds the segment at this
    /// level, together with that capacity in codewords
    fn choose_version(&self, segment: &Segment) -> EncodeResult<(Version, usize)> {
        for version in (1..=40).filter_map(Version::new) {
            let class = LengthClass::for_version(version);
            let capacity = data_codewords(version, self.level);
            if segment.bit_length(class) <= 8 * capacity {
                return Ok((version, capacity));
            }
        }

        Err(EncodeError::CapacityExceeded {
            needed_bits: segment.bit_length(LengthClass::Long),
            available_bits: 8 * data_codewords(Version::MAX, self.level),
            level: self.level.code(),
        })
    }
}

/// Write the interleaved codeword stream: data codewords round-robin across
/// blocks (falling back to the long blocks once the short ones run dry),
/// then parity codewords round-robin
fn place_codewords(
    canvas: &mut BitCanvas,
    encoded: &[u8],
    blocks: &[Block],
    num_data_bytes: usize,
    per_block: usize,
) {
    let mut writer = ZigZagWriter::new(canvas);

    let overflow_index = blocks.len() - num_data_bytes % blocks.len();
    let mut block_index = 0;
    let mut within_block = 0;
    for _ in 0..num_data_bytes {
        writer.write_byte(encoded[blocks[block_index].start + within_block]);

        block_index += 1;
        if block_index >= blocks.len() {
            within_block += 1;
            block_index = if within_block < per_block {
                0
            } else {
                overflow_index
            };
        }
    }

    let num_parity = blocks.first().map_or(0, |block| block.parity.len());
    for i in 0..num_parity {
        for block in blocks {
            writer.write_byte(block.parity[i]);
        }
    }
}
