//! Function pattern layout: finder and alignment targets, timing lines,
//! and the format/version information areas

use super::bch::{format_value, version_value};
use crate::models::{BitCanvas, ECLevel, MaskPattern, Module, Version};

/// Width of a finder target in modules
pub const FINDER_LENGTH: i32 = 7;

/// Width of an alignment target in modules
pub const ALIGNMENT_LENGTH: i32 = 5;

/// Row and column index of the timing lines
pub const TIMING_BAR: usize = 6;

/// Run interpretations for structural writes
const FIXED: [Module; 2] = [Module::Fixed(false), Module::Fixed(true)];

/// The three 7-bit finder rows packed together: ring index 0 is the outer
/// border, 1 the white ring, 2 the solid core
const FINDER_ROWS: u32 = 0b1011101_1000001_1111111;

/// The three 5-bit alignment rows, same layout
const ALIGNMENT_ROWS: u32 = 0b10101_10001_11111;

/// Build the function patterns for a version: timing lines, the three
/// finder targets with their separators, alignment targets, and the
/// version information areas for versions 7 and up. Every remaining cell
/// stays a light data cell.
pub fn build_skeleton(version: Version) -> BitCanvas {
    let side = version.side_length();
    let mut canvas = BitCanvas::new(side, side, Module::Data(false));

    // Timing lines in 8-cell chunks. The last horizontal chunk can spill
    // past the right edge into the next row, but those cells sit under the
    // separators written right after.
    for i in (7..side as i32).step_by(8) {
        canvas.write_up_run(TIMING_BAR as i32, i, 0b1010101, 8, FIXED);
        canvas.write_horizontal_run(i, TIMING_BAR as i32, 0b1010101, 8, FIXED);
    }

    write_finder_targets(&mut canvas);

    let alignments = alignment_coordinates(version);
    let n = alignments.len();
    for i in (0..n * n).rev() {
        // Skip the three positions the finder targets occupy
        if i > 1 && i != n {
            write_alignment_target(&mut canvas, alignments[i % n] as i32, alignments[i / n] as i32);
        }
    }

    write_version_bits(&mut canvas, version);

    canvas
}

/// Write the three finder targets (top-left, top-right, bottom-left) and
/// the one-module light separator bordering each
fn write_finder_targets(canvas: &mut BitCanvas) {
    for i in 0..3 {
        // i & 1 selects the right edge, i >> 1 the bottom edge
        for j in 0..FINDER_LENGTH {
            let ring = j.min(FINDER_LENGTH - 1 - j).min(2);
            canvas.write_horizontal_run(
                -FINDER_LENGTH * (i & 1),
                -FINDER_LENGTH * (i >> 1) + j,
                FINDER_ROWS >> (FINDER_LENGTH * ring),
                FINDER_LENGTH as u32,
                FIXED,
            );
        }

        canvas.write_horizontal_run(
            -(FINDER_LENGTH + 1) * (i & 1),
            if i < 2 { FINDER_LENGTH } else { -(FINDER_LENGTH + 1) },
            0,
            FINDER_LENGTH as u32 + 1,
            FIXED,
        );
        canvas.write_up_run(
            if i & 1 == 1 { -(FINDER_LENGTH + 1) } else { FINDER_LENGTH },
            if i < 2 { FINDER_LENGTH - 1 } else { -1 },
            0,
            FINDER_LENGTH as u32,
            FIXED,
        );
    }
}

/// Center coordinates of the alignment target rows/columns for a version.
/// Position 6 is fixed; the rest walk down from `side - 7` in an even gap
/// rounded up, with any slop absorbed by the gap next to position 6.
pub fn alignment_coordinates(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v < 2 {
        return Vec::new();
    }
    let mut num_per_side = 2 + v / 7;

    let mut coordinate = version.side_length() - 7;
    let mut gap = ((coordinate - TIMING_BAR) as f64 / (num_per_side - 1) as f64).round() as usize;
    gap += gap & 1;

    let mut positions = vec![TIMING_BAR];
    while num_per_side > 1 {
        positions.push(coordinate);
        coordinate -= gap;
        num_per_side -= 1;
    }
    positions
}

/// Write one 5x5 alignment target centered on (x, y)
fn write_alignment_target(canvas: &mut BitCanvas, x: i32, y: i32) {
    for j in 0..ALIGNMENT_LENGTH {
        let ring = j.min(ALIGNMENT_LENGTH - 1 - j);
        canvas.write_horizontal_run(
            x - 2,
            y - 2 + j,
            ALIGNMENT_ROWS >> (ALIGNMENT_LENGTH * ring),
            ALIGNMENT_LENGTH as u32,
            FIXED,
        );
    }
}

/// Write the two 18-bit version information blocks (versions 7 and up):
/// a 6x3 block above the bottom-left finder written in upward 3-bit runs,
/// and its transpose left of the top-right finder written left-to-right
/// with each triple reversed to keep the two blocks symmetric
fn write_version_bits(canvas: &mut BitCanvas, version: Version) {
    if !version.shows_version_info() {
        return;
    }

    let value = version_value(version);
    for i in (0..6).rev() {
        let bits = (value >> (3 * i)) & 0b111;
        canvas.write_up_run(i, -9, bits, 3, FIXED);
        canvas.write_horizontal_run(
            -11,
            i,
            ((bits & 1) << 2) | (bits & 2) | ((bits & 4) >> 2),
            3,
            FIXED,
        );
    }
}

/// Positions of the 15 format bits: bit `i` of the codeword lands at
/// (FORMAT_XS[i], 8) and (8, FORMAT_YS[i])
const FORMAT_XS: [i32; 15] = [-1, -2, -3, -4, -5, -6, -7, -8, 7, 5, 4, 3, 2, 1, 0];
const FORMAT_YS: [i32; 15] = [0, 1, 2, 3, 4, 5, 7, 8, -7, -6, -5, -4, -3, -2, -1];

/// Reserve the format information areas, storing in each cell the darkness
/// it takes under every mask candidate, so the symbol can be rendered for
/// any mask without rewriting the format bits. Also writes the always-dark
/// module above the bottom-left finder.
pub fn write_format_bits(canvas: &mut BitCanvas, level: ECLevel) {
    let formats: Vec<u16> = MaskPattern::ALL
        .iter()
        .map(|&mask| format_value(level, mask))
        .collect();

    for i in (0..15).rev() {
        let mut value = 0u8;
        for (mask, &format) in formats.iter().enumerate() {
            value |= (((format >> i) & 1) as u8) << mask;
        }

        canvas.write_value(FORMAT_XS[i], 8, Module::PerMask(value));
        canvas.write_value(8, FORMAT_YS[i], Module::PerMask(value));
    }

    canvas.write_value(8, -8, Module::Fixed(true));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::num_raw_data_modules;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_alignment_coordinates() {
        assert_eq!(alignment_coordinates(v(1)), Vec::<usize>::new());
        assert_eq!(alignment_coordinates(v(2)), vec![6, 18]);
        assert_eq!(alignment_coordinates(v(7)), vec![6, 38, 22]);
        assert_eq!(alignment_coordinates(v(14)), vec![6, 66, 46, 26]);
        assert_eq!(alignment_coordinates(v(32)), vec![6, 138, 112, 86, 60, 34]);
    }

    #[test]
    fn test_finder_corners_and_separators() {
        let canvas = build_skeleton(v(1));
        // Outer border and core of the top-left target are dark
        assert_eq!(canvas.get(0, 0), Module::Fixed(true));
        assert_eq!(canvas.get(3, 3), Module::Fixed(true));
        // The white ring
        assert_eq!(canvas.get(1, 1), Module::Fixed(false));
        assert_eq!(canvas.get(5, 1), Module::Fixed(false));
        // Separator corner between target and content
        assert_eq!(canvas.get(7, 7), Module::Fixed(false));
        // The other two corners
        assert_eq!(canvas.get(-1, 0), Module::Fixed(true));
        assert_eq!(canvas.get(0, -1), Module::Fixed(true));
        // Bottom-right corner has no target
        assert_eq!(canvas.get(-1, -1), Module::Data(false));
    }

    #[test]
    fn test_timing_lines_alternate() {
        let canvas = build_skeleton(v(2));
        for i in 8..17 {
            assert_eq!(canvas.get(i, 6), Module::Fixed(i % 2 == 0), "col {i}");
            assert_eq!(canvas.get(6, i), Module::Fixed(i % 2 == 0), "row {i}");
        }
    }

    #[test]
    fn test_alignment_target_rings() {
        let canvas = build_skeleton(v(2));
        // Center, white ring, dark border of the single target at (18, 18)
        assert_eq!(canvas.get(18, 18), Module::Fixed(true));
        assert_eq!(canvas.get(17, 18), Module::Fixed(false));
        assert_eq!(canvas.get(16, 18), Module::Fixed(true));
        assert_eq!(canvas.get(16, 16), Module::Fixed(true));
        assert_eq!(canvas.get(15, 18), Module::Data(false));
    }

    #[test]
    fn test_version_blocks_written_from_seven_up() {
        let canvas = build_skeleton(v(6));
        assert_eq!(canvas.get(0, -9), Module::Data(false));

        let canvas = build_skeleton(v(7));
        // 18 reserved cells in each of the two blocks
        for i in 0..6 {
            for j in 9..12 {
                assert!(canvas.get(i, -(j as i32)).is_reserved());
                assert!(canvas.get(-(j as i32), i).is_reserved());
            }
        }
        // Version 7 codeword is 000111110010010100; bits 0..=2 fill the
        // first column of the lower block from the top down
        assert_eq!(canvas.get(0, -11), Module::Fixed(false));
        assert_eq!(canvas.get(0, -10), Module::Fixed(false));
        assert_eq!(canvas.get(0, -9), Module::Fixed(true));
    }

    #[test]
    fn test_format_cells_hold_per_mask_darkness() {
        let mut canvas = build_skeleton(v(1));
        write_format_bits(&mut canvas, ECLevel::L);

        assert_eq!(canvas.get(8, -8), Module::Fixed(true));

        for mask in MaskPattern::ALL {
            let format = format_value(ECLevel::L, mask);
            for i in 0..15 {
                let expected = (format >> i) & 1 == 1;
                let (x, y) = (canvas.get(FORMAT_XS[i], 8), canvas.get(8, FORMAT_YS[i]));
                assert!(matches!(x, Module::PerMask(_)));
                assert_eq!(x, y);
                let column = (canvas.width() as i32 + FORMAT_XS[i]) % canvas.width() as i32;
                assert_eq!(
                    canvas.dark(column as usize, 8, mask),
                    expected,
                    "bit {i} mask {}",
                    mask.id()
                );
            }
        }
    }

    #[test]
    fn test_open_cell_count_matches_capacity_formula() {
        for number in [1u8, 2, 6, 7, 10, 25, 40] {
            let version = v(number);
            let mut canvas = build_skeleton(version);
            write_format_bits(&mut canvas, ECLevel::M);

            let side = version.side_length();
            let mut open = 0;
            for y in 0..side {
                for x in 0..side {
                    if !canvas.get(x as i32, y as i32).is_reserved() {
                        open += 1;
                    }
                }
            }
            assert_eq!(open, num_raw_data_modules(version), "version {number}");
        }
    }
}
