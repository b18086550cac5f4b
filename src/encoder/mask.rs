//! Mask evaluation: penalty scoring of the eight candidates and selection
//! of the winner

use rayon::prelude::*;

use crate::models::{BitCanvas, MaskPattern};

const BAD_PATTERN: u32 = 0b1011101;
const BAD_PATTERN_COST: u64 = 40;

fn flush_run(run_length: &mut u64, score: &mut u64) {
    if *run_length >= 5 {
        *score += *run_length;
    }
    *run_length = 0;
}

/// Penalty score of the symbol under one mask candidate; lower is better.
///
/// Four penalties: same-color runs of five or more (their length), every
/// same-color rectangle taller and wider than one cell (3 per cell of
/// excess area, counted per sub-rectangle), the finder-like sequence
/// 1011101 in either direction (40 each), and dark/light imbalance
/// (10 per 5% off half).
///
/// `rect_data` is scratch of at least `side * side` entries, indexed
/// column-major so each column of the dynamic program is contiguous.
pub fn score_mask(canvas: &BitCanvas, mask: MaskPattern, rect_data: &mut [u32]) -> u64 {
    let size = canvas.width();

    let mut score: u64 = 0;
    let mut num_dark: u64 = 0;
    let mut run_length: u64 = 0;

    for y in 0..size {
        let mut pattern: u32 = 0;

        for x in 0..size {
            let bit = canvas.dark(x, y, mask) as u32;
            num_dark += bit as u64;

            let rect_index = x * size + y;

            if bit != (pattern & 1) {
                flush_run(&mut run_length, &mut score);
            }
            run_length += 1;
            rect_data[rect_index] = run_length as u32;

            if y > 0 {
                if bit == canvas.dark(x, y - 1, mask) as u32 {
                    // Same color as the cell above: every rectangle with
                    // this cell at its bottom-right adds 3 per cell beyond
                    // the first row and column
                    let mut width = run_length as u32;
                    let mut height_minus_1 = 1usize;
                    while width > 0 && height_minus_1 <= y {
                        width = width.min(rect_data[rect_index - height_minus_1]);
                        rect_data[rect_index - height_minus_1] = width;

                        let sum_of_widths = (width as u64) * (width as u64).saturating_sub(1) / 2;
                        score += 3 * height_minus_1 as u64 * sum_of_widths;
                        height_minus_1 += 1;
                    }
                } else {
                    // A color change above caps rectangle growth here
                    rect_data[rect_index - 1] = 0;
                }
            }

            pattern = ((pattern & 63) << 1) | bit;
            if pattern == BAD_PATTERN {
                score += BAD_PATTERN_COST;
            }
        }

        flush_run(&mut run_length, &mut score);
    }

    // Dark/light balance, 10 points per 5% away from an even split
    let ratio = num_dark as f64 / (size * size) as f64;
    score += 10 * (20.0 * (ratio - 0.5).abs()) as u64;

    // Finder-like sequences and runs again, vertically; rectangles were
    // fully counted in the row pass
    for x in 0..size {
        let mut pattern: u32 = 0;

        for y in 0..size {
            let bit = canvas.dark(x, y, mask) as u32;

            if bit != (pattern & 1) {
                flush_run(&mut run_length, &mut score);
            }
            run_length += 1;

            pattern = ((pattern & 63) << 1) | bit;
            if pattern == BAD_PATTERN {
                score += BAD_PATTERN_COST;
            }
        }

        flush_run(&mut run_length, &mut score);
    }

    score
}

/// Score all eight candidates in parallel and pick the winner: the lowest
/// score, breaking ties toward the lowest mask id
pub fn select_mask(canvas: &BitCanvas) -> (MaskPattern, u64) {
    let size = canvas.width();

    let scores: Vec<u64> = MaskPattern::ALL
        .into_par_iter()
        .map(|mask| {
            let mut rect_data = vec![0u32; size * size];
            score_mask(canvas, mask, &mut rect_data)
        })
        .collect();

    let mut best = 0;
    for (id, &score) in scores.iter().enumerate() {
        if score < scores[best] {
            best = id;
        }
    }
    (MaskPattern::ALL[best], scores[best])
}
