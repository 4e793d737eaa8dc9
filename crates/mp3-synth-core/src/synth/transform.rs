//! 32-point synthesis transform
//!
//! Turns one 32-sample subband group into 33 taps spread over the two
//! history slots. A history slot is 17 rows of 0x20 bytes; each row holds one
//! tap for each of the 16 phases, so a group only ever writes the column
//! selected by its phase.
//!
//! - even pass: rows 0, 2, .., 14 of the new slot and rows 0, 2, .., 16 of
//!   the previous slot
//! - odd pass: rows 1, 3, .., 15 of both slots

use super::butterfly::butterfly_network;
use super::fixed_point::mul_shift16;
use super::tables::{C64_ODD, INPUT_PAIRS};
use super::workspace::{Workspace, HISTORY_SLOT_A, HISTORY_SLOT_B, TAP_ROW_STRIDE};
use crate::error::Result;
use crate::types::Phase;

/// The two alternating history slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistorySlots {
    current: usize,
    previous: usize,
}

impl HistorySlots {
    /// Slot assignment at the start of every frame
    pub const fn new() -> Self {
        Self {
            current: HISTORY_SLOT_A,
            previous: HISTORY_SLOT_B,
        }
    }

    /// Base offset of the slot receiving the new generation
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Base offset of the slot holding the previous generation
    pub const fn previous(&self) -> usize {
        self.previous
    }

    /// Exchange the two slots after a group
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }
}

impl Default for HistorySlots {
    fn default() -> Self {
        Self::new()
    }
}

/// Offset of `phase`'s column within the slot at `base`
#[inline]
pub fn phase_column(base: usize, phase: Phase) -> usize {
    base | ((phase.value() as usize) << 1)
}

/// Load the 16 mirrored sums of the group at `input`
fn load_mirrored_sums(ws: &Workspace, input: usize) -> Result<[i32; 16]> {
    let mut v = [0i32; 16];
    for (slot, &(lo, hi)) in v.iter_mut().zip(INPUT_PAIRS.iter()) {
        *slot = ws.sample_at(input + 2 * lo)? as i32 + ws.sample_at(input + 2 * hi)? as i32;
    }
    Ok(v)
}

/// Store a tap at `row` of a column, truncated to 16 bits
#[inline]
fn store_tap(ws: &mut Workspace, column: usize, row: usize, value: i32) -> Result<()> {
    ws.set_sample_at(column + row * TAP_ROW_STRIDE, value as i16)
}

/// Run the synthesis transform on the 32 samples at `input`.
///
/// Writes the even-pass and odd-pass taps into `phase`'s column of both
/// history slots.
pub fn synthesis_transform(
    ws: &mut Workspace,
    input: usize,
    slots: &HistorySlots,
    phase: Phase,
) -> Result<()> {
    let new = phase_column(slots.current(), phase);
    let prev = phase_column(slots.previous(), phase);

    even_pass(ws, input, new, prev)?;
    odd_pass(ws, input, new, prev)
}

fn even_pass(ws: &mut Workspace, input: usize, new: usize, prev: usize) -> Result<()> {
    let mut v = load_mirrored_sums(ws, input)?;
    butterfly_network(&mut v);

    let t5 = v[5] + v[4];
    let t2 = v[8] + v[9];
    let t3 = v[8] + v[10];
    let t13 = v[13] - t2 + v[12];
    let t14 = t3 - v[14];
    let t15 = v[15] - t2 - v[11];

    store_tap(ws, new, 0, v[1])?;
    store_tap(ws, new, 2, v[9] + t14)?;
    store_tap(ws, new, 4, t5 - v[6])?;
    store_tap(ws, new, 6, t13 - v[10])?;
    store_tap(ws, new, 8, v[3] - v[2])?;
    store_tap(ws, new, 10, v[11] - t13)?;
    store_tap(ws, new, 12, v[7] - t5)?;
    store_tap(ws, new, 14, t15)?;

    store_tap(ws, prev, 0, -v[1])?;
    store_tap(ws, prev, 2, t14)?;
    store_tap(ws, prev, 4, v[4] - v[6])?;
    store_tap(ws, prev, 6, v[12] - v[10] - v[8])?;
    store_tap(ws, prev, 8, -v[2])?;
    store_tap(ws, prev, 10, v[8] - v[12])?;
    store_tap(ws, prev, 12, -v[4])?;
    store_tap(ws, prev, 14, -v[8])?;
    store_tap(ws, prev, 16, -v[0])
}

fn odd_pass(ws: &mut Workspace, input: usize, new: usize, prev: usize) -> Result<()> {
    let mut v = load_mirrored_sums(ws, input)?;
    for (x, &w) in v.iter_mut().zip(C64_ODD.iter()) {
        *x = mul_shift16(*x, w);
    }
    butterfly_network(&mut v);

    let t0 = v[0] >> 1;
    let t4 = v[4] + t0;
    let t5 = v[5] + v[1];
    let t6 = v[6] + t0 + v[2];
    let t7 = v[7] + t0 + v[1] + v[3];
    let t10 = v[10] + v[8];
    let t11 = v[11] + v[8] + v[9];
    let t12 = t4 - v[12];
    let t13 = v[13] - t12 - t5;
    let t14 = t6 - v[14];
    let t15 = v[15] - t7;
    // t13 above uses the partial sum; later taps use the full one
    let t5 = t4 + t5;
    let t9 = v[9] + t10;

    store_tap(ws, prev, 1, t14)?;
    store_tap(ws, prev, 3, t10 - t6)?;
    store_tap(ws, prev, 5, t4 - t10 + v[2])?;
    store_tap(ws, prev, 7, -t12 - v[2])?;
    store_tap(ws, prev, 9, t12)?;
    store_tap(ws, prev, 11, v[8] - t4)?;
    store_tap(ws, prev, 13, t0 - v[8])?;
    store_tap(ws, prev, 15, -t0)?;

    store_tap(ws, new, 1, t14 + v[1])?;
    store_tap(ws, new, 3, t9 - v[1] - t6)?;
    store_tap(ws, new, 5, t5 + v[2] - t9)?;
    store_tap(ws, new, 7, t13 - v[2])?;
    store_tap(ws, new, 9, v[3] - t13)?;
    store_tap(ws, new, 11, t11 - v[3] - t5)?;
    store_tap(ws, new, 13, t7 - t11)?;
    store_tap(ws, new, 15, t15)
}
