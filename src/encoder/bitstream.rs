//! Bit-level serialization of the data codeword stream

use super::segment::{ECI_UTF8_HEADER, LengthClass, Segment};

/// Alternating pad codewords from the spec, appended after the terminator
pub const PAD_BYTES: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// Bit accumulator that buffers partial bytes across calls
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    current: u8,
    bits_used: u32,
}

impl BitWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `num_bits` bits of `value`, most significant first
    pub fn append_bits(&mut self, num_bits: u32, value: u32) {
        self.bits_used += num_bits;
        while self.bits_used >= 8 {
            self.bits_used -= 8;
            self.bytes
                .push(self.current | ((value >> self.bits_used) & 0xff) as u8);
            self.current = 0;
        }
        // No-op when the stream is byte aligned (mask is zero)
        let remaining_mask = (1u32 << self.bits_used) - 1;
        self.current |= (((value & remaining_mask) << (8 - self.bits_used)) & 0xff) as u8;
    }

    /// Number of completed bytes so far
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Finish the stream; the caller is responsible for having padded to a
    /// byte boundary
    pub fn into_bytes(self) -> Vec<u8> {
        debug_assert_eq!(self.bits_used, 0, "bit stream not byte aligned");
        self.bytes
    }
}

/// Serialize one segment into exactly `num_data_bytes` codewords:
/// mode header, character count, payload, then a zero terminator byte and
/// alternating pad codewords until full
pub fn encode_data(num_data_bytes: usize, class: LengthClass, segment: &Segment) -> Vec<u8> {
    let mut writer = BitWriter::new();

    writer.append_bits(16, ECI_UTF8_HEADER);
    writer.append_bits(class.count_bits(), segment.bytes().len() as u32);
    for &byte in segment.bytes() {
        writer.append_bits(8, byte as u32);
    }

    // The header and payload are byte aligned, so the first pad byte doubles
    // as the 4-bit terminator plus alignment zeros
    let mut pad_index = 0usize;
    while writer.byte_len() < num_data_bytes {
        let byte = if pad_index == 0 {
            0
        } else {
            PAD_BYTES[(pad_index + 1) % 2]
        };
        writer.append_bits(8, byte as u32);
        pad_index += 1;
    }

    writer.into_bytes()
}
