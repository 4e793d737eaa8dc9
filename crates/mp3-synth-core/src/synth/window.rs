//! Windowing stage
//!
//! Combines the 17 tap rows of the newest history slot with a phase-rotated
//! slice of the dewindow table into 33 output samples:
//!
//! - samples 0..16: rows 0..15 read forward, even and odd sums added
//! - sample 16: row 16, even or odd sum depending on the phase parity
//! - samples 17..33: rows 15..0 read backward, odd sum subtracted from even
//!
//! Sample 32 lands on the first sample of the following group, which
//! overwrites it; on the last group of a sub-block it spills one sample past
//! the output block.

use super::fixed_point::dot8_pair;
use super::tables::dewindow_window;
use super::workspace::{Workspace, TAP_PAIR_STRIDE, TAP_ROW_STRIDE};
use crate::error::{Result, SynthError};
use crate::types::Phase;

/// Samples written per call
pub const WINDOW_OUTPUT_SAMPLES: usize = 33;

const FORWARD_ROWS: usize = 16;
const BACKWARD_PAIRS: usize = 8;
const FORWARD_TABLE_START: usize = 0x10;
const BACKWARD_TABLE_START: usize = 0x22f;

/// Paired dot product of the row at `row` against the table slice at `table`
fn row_dot(ws: &Workspace, row: usize, table: usize) -> Result<(i32, i32)> {
    let taps = ws.read_row(row)?;
    let coeffs = dewindow_window(table).ok_or(SynthError::TableOutOfRange { offset: table })?;
    Ok(dot8_pair(&taps, &coeffs))
}

/// Window the history slot at `slot` into 33 samples at `out`.
///
/// `slot` is the slot's base offset; all 16 phase columns of each row enter
/// the dot products.
pub fn window(ws: &mut Workspace, phase: Phase, slot: usize, out: usize) -> Result<()> {
    let p = phase.value() as usize;
    let mut row = slot;
    let mut table = FORWARD_TABLE_START - p;
    let mut dst = out;

    for _ in 0..FORWARD_ROWS {
        let (even, odd) = row_dot(ws, row, table)?;
        ws.set_sample_at(dst, (even + odd) as i16)?;
        dst += 2;
        row += TAP_ROW_STRIDE;
        table += TAP_ROW_STRIDE;
    }

    // Crossover row: only one parity contributes
    let (even, odd) = row_dot(ws, row, table)?;
    let crossover = if phase.is_odd() { even } else { odd };
    ws.set_sample_at(dst, crossover as i16)?;
    dst += 2;

    row -= TAP_PAIR_STRIDE;
    table = BACKWARD_TABLE_START - p;
    for _ in 0..BACKWARD_PAIRS {
        let (even, odd) = row_dot(ws, row + TAP_ROW_STRIDE, table)?;
        let upper = even - odd;
        let (even, odd) = row_dot(ws, row, table + TAP_ROW_STRIDE)?;
        let lower = even - odd;

        ws.set_sample_at(dst, upper as i16)?;
        ws.set_sample_at(dst + 2, lower as i16)?;
        dst += 4;
        // Steps below the slot base after the final pair; never read
        row = row.wrapping_sub(TAP_PAIR_STRIDE);
        table += TAP_PAIR_STRIDE;
    }

    Ok(())
}
