//! Output gain stage

use super::fixed_point::scaled_multiply;
use super::workspace::Workspace;
use crate::error::Result;

/// Multiply `count` samples at `offset` by `gain`, saturating to 16 bits.
///
/// No shift is applied, so a gain of 1 leaves samples unchanged.
pub fn apply_gain(ws: &mut Workspace, offset: usize, count: usize, gain: i16) -> Result<()> {
    for i in 0..count {
        ws.update_sample_at(offset + 2 * i, |s| scaled_multiply(s, gain))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::workspace::{OUTPUT_OFFSET, WORKSPACE_SIZE};

    fn fill(ws: &mut Workspace, values: &[i16]) {
        for (i, &v) in values.iter().enumerate() {
            ws.set_sample_at(OUTPUT_OFFSET + 2 * i, v).unwrap();
        }
    }

    fn read(ws: &Workspace, count: usize) -> Vec<i16> {
        (0..count)
            .map(|i| ws.sample_at(OUTPUT_OFFSET + 2 * i).unwrap())
            .collect()
    }

    #[test]
    fn test_identity_gain() {
        let mut ws = Workspace::default();
        let values = [-32768, -1, 0, 1, 32767];
        fill(&mut ws, &values);
        apply_gain(&mut ws, OUTPUT_OFFSET, values.len(), 1).unwrap();
        assert_eq!(read(&ws, values.len()), values);
    }

    #[test]
    fn test_negative_gain_saturates() {
        let mut ws = Workspace::default();
        fill(&mut ws, &[-32768, 100, 32767]);
        apply_gain(&mut ws, OUTPUT_OFFSET, 3, -1).unwrap();
        assert_eq!(read(&ws, 3), [32767, -100, -32767]);
    }

    #[test]
    fn test_large_gain_clamps() {
        let mut ws = Workspace::default();
        fill(&mut ws, &[2000, -2000, 3]);
        apply_gain(&mut ws, OUTPUT_OFFSET, 3, 20).unwrap();
        assert_eq!(read(&ws, 3), [32767, -32768, 60]);
    }

    #[test]
    fn test_count_bounds_the_run() {
        let mut ws = Workspace::default();
        fill(&mut ws, &[5, 5, 5]);
        apply_gain(&mut ws, OUTPUT_OFFSET, 2, 3).unwrap();
        assert_eq!(read(&ws, 3), [15, 15, 5]);
        assert!(apply_gain(&mut ws, WORKSPACE_SIZE - 2, 2, 3).is_err());
    }
}
