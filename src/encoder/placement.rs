//! Codeword placement: the two-column zig-zag walk over the data region

use crate::models::{BitCanvas, Module};

use super::structure::TIMING_BAR;

/// Cursor that walks the data region in the standard two-column zig-zag,
/// bottom-right to bottom-left, skipping reserved cells.
///
/// The walk runs on a virtual grid one column and one row smaller than the
/// canvas, with the timing lines removed; virtual coordinates at or past
/// the timing bar shift by one to get the real cell.
pub struct ZigZagWriter<'a> {
    canvas: &'a mut BitCanvas,
    virtual_side: i32,
    x: i32,
    y: i32,
    going_up: bool,
}

impl<'a> ZigZagWriter<'a> {
    /// Start a walk over `canvas`, positioned just before the bottom-right
    /// corner
    pub fn new(canvas: &'a mut BitCanvas) -> Self {
        let virtual_side = canvas.width() as i32 - 1;
        Self {
            canvas,
            virtual_side,
            x: virtual_side - 2,
            y: virtual_side,
            going_up: true,
        }
    }

    /// Step the cursor to the next cell of the zig-zag: right column first,
    /// then left, climbing the column pair and snaking at the edges
    fn advance(&mut self) {
        if self.x & 1 == 1 {
            self.x -= 1;
        } else if self.going_up {
            if self.y > 0 {
                self.y -= 1;
                self.x += 1;
            } else {
                self.going_up = false;
                self.x -= 1;
            }
        } else {
            self.y += 1;
            if self.y < self.virtual_side {
                self.x += 1;
            } else {
                self.going_up = true;
                self.y -= 1;
                self.x -= 1;
            }
        }
    }

    /// Real canvas coordinates for the current virtual position
    fn real_position(&self) -> (i32, i32) {
        (
            self.x + i32::from(self.x >= TIMING_BAR as i32),
            self.y + i32::from(self.y >= TIMING_BAR as i32),
        )
    }

    /// Write one codeword, most significant bit first, into the next eight
    /// open data cells
    pub fn write_byte(&mut self, byte: u8) {
        for i in (0..8).rev() {
            let (x, y) = loop {
                self.advance();
                let position = self.real_position();
                if !self.canvas.get(position.0, position.1).is_reserved() {
                    break position;
                }
            };
            self.canvas
                .write_value(x, y, Module::Data(byte & (1 << i) != 0));
        }
    }
}
