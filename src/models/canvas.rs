//! The working grid a symbol is assembled on

use super::{BitMatrix, MaskPattern};

/// One cell of an in-progress symbol grid.
///
/// Structural cells are tagged instead of sharing an integer encoding with
/// data cells, so the placement and masking phases can never touch them by
/// accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// Codeword cell holding its darkness before mask application
    Data(bool),
    /// Structural cell with a fixed color, never masked
    Fixed(bool),
    /// Format information cell: one precomputed darkness bit per mask
    /// candidate (bit k = darkness when mask k wins)
    PerMask(u8),
}

impl Module {
    /// Structural cells are reserved: placement skips them and masks never
    /// flip them
    pub fn is_reserved(self) -> bool {
        !matches!(self, Module::Data(_))
    }
}

/// Flat addressable grid of [`Module`] cells with edge-relative indexing
/// and MSB-first run writes.
#[derive(Debug, Clone)]
pub struct BitCanvas {
    width: usize,
    height: usize,
    cells: Vec<Module>,
}

impl BitCanvas {
    /// Create a canvas filled with `fill`
    pub fn new(width: usize, height: usize, fill: Module) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Canvas width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Normalize edge-relative coordinates to a flat index.
    /// Negative x/y address from the far edge.
    fn index(&self, x: i32, y: i32) -> usize {
        let column = if x < 0 { self.width as i32 + x } else { x };
        let row = if y < 0 { self.height as i32 + y } else { y };
        debug_assert!(
            (0..self.width as i32).contains(&column) && (0..self.height as i32).contains(&row),
            "cell ({x}, {y}) outside {}x{} canvas",
            self.width,
            self.height
        );
        row as usize * self.width + column as usize
    }

    /// Read the cell at (x, y); negative coordinates count from the far edge
    pub fn get(&self, x: i32, y: i32) -> Module {
        self.cells[self.index(x, y)]
    }

    /// Write one cell at (x, y); negative coordinates count from the far edge
    pub fn write_value(&mut self, x: i32, y: i32, value: Module) {
        let index = self.index(x, y);
        self.cells[index] = value;
    }

    /// Write `num_bits` cells left-to-right starting at (x, y), reading `bits`
    /// from most-significant to least-significant and mapping each bit
    /// through `interpretations` (index 0 for a 0 bit, index 1 for a 1 bit).
    ///
    /// Steps the flat index, so a run touching the right edge spills into the
    /// next row start; callers only do this where a later structural write
    /// owns the spill cells.
    pub fn write_horizontal_run(
        &mut self,
        x: i32,
        y: i32,
        bits: u32,
        num_bits: u32,
        interpretations: [Module; 2],
    ) {
        let mut index = self.index(x, y);
        for bit_to_read in (0..num_bits).rev() {
            self.cells[index] = interpretations[((bits >> bit_to_read) & 1) as usize];
            index += 1;
        }
    }

    /// Write `num_bits` cells bottom-to-top starting at (x, y), reading `bits`
    /// from most-significant to least-significant through `interpretations`
    pub fn write_up_run(
        &mut self,
        x: i32,
        y: i32,
        bits: u32,
        num_bits: u32,
        interpretations: [Module; 2],
    ) {
        let mut index = self.index(x, y);
        for bit_to_read in (0..num_bits).rev() {
            self.cells[index] = interpretations[((bits >> bit_to_read) & 1) as usize];
            if bit_to_read > 0 {
                index -= self.width;
            }
        }
    }

    /// Darkness of the cell at (x, y) under a mask candidate.
    /// Data cells XOR the mask formula, structural cells are constant, and
    /// format cells index their precomputed per-mask bit.
    pub fn dark(&self, x: usize, y: usize, mask: MaskPattern) -> bool {
        match self.cells[y * self.width + x] {
            Module::Data(bit) => bit ^ mask.is_masked(y, x),
            Module::Fixed(dark) => dark,
            Module::PerMask(bits) => (bits >> mask.id()) & 1 == 1,
        }
    }

    /// Run-length encode the dark cells into SVG path data.
    ///
    /// Scans row-major and emits one `M<x> <y>.5 h<len>` move + horizontal
    /// line command per run of cells for which `is_dark` holds, shifting
    /// coordinates by the offsets (the quiet zone border).
    pub fn make_path<F>(&self, offset_x: usize, offset_y: usize, is_dark: F) -> String
    where
        F: Fn(usize, usize) -> bool,
    {
        let mut runs: Vec<String> = Vec::new();
        for y in 0..self.height {
            let mut run_length = 0;
            for x in 0..=self.width {
                if x < self.width && is_dark(x, y) {
                    run_length += 1;
                } else if run_length > 0 {
                    runs.push(format!(
                        "M{} {}.5 h{}",
                        offset_x + x - run_length,
                        offset_y + y,
                        run_length
                    ));
                    run_length = 0;
                }
            }
        }
        runs.join(" ")
    }

    /// Snapshot the final module grid under the chosen mask
    pub fn resolve(&self, mask: MaskPattern) -> BitMatrix {
        let mut matrix = BitMatrix::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                matrix.set(x, y, self.dark(x, y, mask));
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: [Module; 2] = [Module::Data(false), Module::Data(true)];
    const FIXED: [Module; 2] = [Module::Fixed(false), Module::Fixed(true)];

    #[test]
    fn test_edge_relative_indexing() {
        let mut canvas = BitCanvas::new(5, 5, Module::Data(false));
        canvas.write_value(-1, -1, Module::Fixed(true));
        assert_eq!(canvas.get(4, 4), Module::Fixed(true));
        canvas.write_value(-5, 0, Module::Fixed(false));
        assert_eq!(canvas.get(0, 0), Module::Fixed(false));
    }

    #[test]
    fn test_horizontal_run_msb_first() {
        let mut canvas = BitCanvas::new(8, 1, Module::Data(false));
        canvas.write_horizontal_run(0, 0, 0b1011, 4, PLAIN);
        assert_eq!(canvas.get(0, 0), Module::Data(true));
        assert_eq!(canvas.get(1, 0), Module::Data(false));
        assert_eq!(canvas.get(2, 0), Module::Data(true));
        assert_eq!(canvas.get(3, 0), Module::Data(true));
        assert_eq!(canvas.get(4, 0), Module::Data(false));
    }

    #[test]
    fn test_up_run_walks_toward_top() {
        let mut canvas = BitCanvas::new(1, 4, Module::Data(false));
        canvas.write_up_run(0, -1, 0b101, 3, FIXED);
        // MSB lands at the starting row, walking upward
        assert_eq!(canvas.get(0, 3), Module::Fixed(true));
        assert_eq!(canvas.get(0, 2), Module::Fixed(false));
        assert_eq!(canvas.get(0, 1), Module::Fixed(true));
        assert_eq!(canvas.get(0, 0), Module::Data(false));
    }

    #[test]
    fn test_interpretations_select_reserved_cells() {
        let mut canvas = BitCanvas::new(2, 1, Module::Data(false));
        canvas.write_horizontal_run(0, 0, 0b10, 2, FIXED);
        assert!(canvas.get(0, 0).is_reserved());
        assert!(canvas.get(1, 0).is_reserved());
        assert!(canvas.dark(0, 0, MaskPattern::Pattern0));
        assert!(!canvas.dark(1, 0, MaskPattern::Pattern0));
    }

    #[test]
    fn test_data_cells_respect_mask() {
        let mut canvas = BitCanvas::new(2, 2, Module::Data(false));
        canvas.write_value(0, 0, Module::Data(true));
        // Pattern0 flips cells where (row + col) is even
        assert!(!canvas.dark(0, 0, MaskPattern::Pattern0));
        assert!(!canvas.dark(1, 0, MaskPattern::Pattern0));
        assert!(canvas.dark(1, 1, MaskPattern::Pattern0));
    }

    #[test]
    fn test_per_mask_cells() {
        let mut canvas = BitCanvas::new(1, 1, Module::Data(false));
        canvas.write_value(0, 0, Module::PerMask(0b0001_0010));
        assert!(!canvas.dark(0, 0, MaskPattern::Pattern0));
        assert!(canvas.dark(0, 0, MaskPattern::Pattern1));
        assert!(canvas.dark(0, 0, MaskPattern::Pattern4));
        assert!(!canvas.dark(0, 0, MaskPattern::Pattern7));
    }

    #[test]
    fn test_make_path_run_length_encodes_rows() {
        let mut canvas = BitCanvas::new(4, 2, Module::Fixed(false));
        canvas.write_horizontal_run(0, 0, 0b1101, 4, FIXED);
        canvas.write_horizontal_run(0, 1, 0b0110, 4, FIXED);
        let path = canvas.make_path(0, 0, |x, y| canvas.dark(x, y, MaskPattern::Pattern0));
        assert_eq!(path, "M0 0.5 h2 M3 0.5 h1 M1 1.5 h2");
    }

    #[test]
    fn test_make_path_applies_offsets() {
        let mut canvas = BitCanvas::new(3, 1, Module::Fixed(false));
        canvas.write_horizontal_run(0, 0, 0b011, 3, FIXED);
        let path = canvas.make_path(4, 4, |x, y| canvas.dark(x, y, MaskPattern::Pattern0));
        assert_eq!(path, "M5 4.5 h2");
    }

    #[test]
    fn test_resolve_snapshots_grid() {
        let mut canvas = BitCanvas::new(2, 1, Module::Fixed(false));
        canvas.write_value(1, 0, Module::Fixed(true));
        let matrix = canvas.resolve(MaskPattern::Pattern3);
        assert!(!matrix.get(0, 0));
        assert!(matrix.get(1, 0));
    }
}
