//! Frame driver
//!
//! One frame is an 8-byte gain header followed by three sub-blocks of six
//! 32-sample subband groups. Each sub-block is loaded into the workspace,
//! run group by group through transform, window and gain, and the PCM is
//! written back over the caller's buffer starting at the header address.

use super::gain::apply_gain;
use super::transform::{synthesis_transform, HistorySlots};
use super::window::window;
use super::workspace::{
    Workspace, GROUP_BYTES, HEADER_BYTES, HEADER_OFFSET, INPUT_OFFSET, OUTPUT_OFFSET,
    SUB_BLOCK_BYTES,
};
use crate::error::Result;
use crate::memory::ExternalMemory;
use crate::types::{DecoderConfig, FrameSummary, GainPair, Phase};
use crate::utils::offset_address;
use tracing::{debug, trace, warn};

/// Sub-blocks per frame
pub const SUB_BLOCKS: usize = 3;
/// 32-sample groups per sub-block
pub const GROUPS_PER_SUB_BLOCK: usize = 6;
/// Groups per frame; the phase moves back by this much over one frame
pub const GROUPS_PER_FRAME: usize = SUB_BLOCKS * GROUPS_PER_SUB_BLOCK;
/// PCM bytes produced per frame
pub const FRAME_BYTES: usize = SUB_BLOCKS * SUB_BLOCK_BYTES;
/// External bytes consumed per frame, header included
pub const FRAME_INPUT_BYTES: usize = HEADER_BYTES + FRAME_BYTES;

/// Samples gained at the head of a group, the crossover sample included
const HEAD_SAMPLES: usize = 17;
/// Samples gained at the tail of a group
const TAIL_SAMPLES: usize = 16;
/// Byte offset of the tail within a group's output
const TAIL_OFFSET: usize = 0x22;

/// Fixed-point MPEG synthesis filter bank decoder
///
/// Owns the workspace, so independent decoders never share history. The
/// phase is carried by the caller from one frame to the next.
///
/// # Example
/// ```
/// use mp3_synth_core::{DecoderConfig, Phase, SynthesisDecoder};
///
/// let mut decoder = SynthesisDecoder::new(DecoderConfig::default());
/// let mut memory = vec![0u8; 0x488];
///
/// let summary = decoder.decode_frame(&mut memory, 0, Phase::new(0).unwrap()).unwrap();
/// assert_eq!(summary.next_phase.value(), 14);
/// assert!(memory.iter().all(|&b| b == 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisDecoder {
    config: DecoderConfig,
    workspace: Workspace,
}

impl SynthesisDecoder {
    /// Create a decoder with empty history
    pub fn new(config: DecoderConfig) -> Self {
        debug!("Creating synthesis decoder ({} layout)", config.layout);
        Self {
            workspace: Workspace::new(config.layout),
            config,
        }
    }

    /// Decoder configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Workspace, for inspection
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Forget all history
    pub fn reset(&mut self) {
        trace!("Resetting synthesis decoder");
        self.workspace.clear();
    }

    /// Decode the frame at `address`, starting at `phase`.
    ///
    /// Reads 0x488 bytes from `address` and writes 0x480 bytes of PCM back
    /// starting at `address`.
    ///
    /// # Errors
    ///
    /// Fails before touching the workspace or `memory` if the 0x488-byte
    /// range does not fit in `memory` or runs past the 32-bit address space.
    pub fn decode_frame<M: ExternalMemory + ?Sized>(
        &mut self,
        memory: &mut M,
        address: u32,
        phase: Phase,
    ) -> Result<FrameSummary> {
        if let Err(e) = memory
            .check_range(address, FRAME_INPUT_BYTES)
            // The last byte must still have a 32-bit address
            .and_then(|_| offset_address(address, FRAME_INPUT_BYTES - 1))
        {
            warn!("Rejecting frame at {:#010x}: {}", address, e);
            return Err(e);
        }

        self.workspace
            .bulk_load(&*memory, address, HEADER_OFFSET, HEADER_BYTES)?;
        let gains = self.read_gains()?;
        debug!(
            "Decoding frame at {:#010x}: phase {}, gains {}/{}",
            address, phase, gains.primary, gains.alternate
        );

        let mut phase = phase;
        let mut slots = HistorySlots::new();
        for block in 0..SUB_BLOCKS {
            trace!("Sub-block {} starting at phase {}", block, phase);
            let output_address = offset_address(address, block * SUB_BLOCK_BYTES)?;
            let input_address = offset_address(output_address, HEADER_BYTES)?;
            self.workspace
                .bulk_load(&*memory, input_address, INPUT_OFFSET, SUB_BLOCK_BYTES)?;
            phase = self.run_sub_block(phase, &mut slots, gains)?;
            self.workspace
                .bulk_store(OUTPUT_OFFSET, memory, output_address, SUB_BLOCK_BYTES)?;
        }

        Ok(FrameSummary {
            gains,
            next_phase: phase,
        })
    }

    /// Decode `count` frames laid out back to back from `address`.
    ///
    /// Frame `i` occupies `address + i * 0x488`; the phase each frame returns
    /// starts the next one. Returns the summary of every frame.
    ///
    /// # Errors
    ///
    /// Fails before decoding anything if the whole run does not fit in
    /// `memory` or runs past the 32-bit address space.
    pub fn decode_frames<M: ExternalMemory + ?Sized>(
        &mut self,
        memory: &mut M,
        address: u32,
        count: usize,
        phase: Phase,
    ) -> Result<Vec<FrameSummary>> {
        let total = FRAME_INPUT_BYTES.saturating_mul(count);
        if let Err(e) = memory
            .check_range(address, total)
            .and_then(|_| offset_address(address, total.saturating_sub(1)))
        {
            warn!("Rejecting {} frames at {:#010x}: {}", count, address, e);
            return Err(e);
        }

        let mut summaries = Vec::with_capacity(count);
        let mut phase = phase;
        for i in 0..count {
            let frame_address = offset_address(address, i * FRAME_INPUT_BYTES)?;
            let summary = self.decode_frame(memory, frame_address, phase)?;
            phase = summary.next_phase;
            summaries.push(summary);
        }
        Ok(summaries)
    }

    /// Gains live in the upper half-word of each header word
    fn read_gains(&self) -> Result<GainPair> {
        Ok(GainPair::new(
            self.workspace.sample_at(HEADER_OFFSET)?,
            self.workspace.sample_at(HEADER_OFFSET + 4)?,
        ))
    }

    /// Run the six groups of the loaded sub-block, returning the phase that follows
    fn run_sub_block(
        &mut self,
        mut phase: Phase,
        slots: &mut HistorySlots,
        gains: GainPair,
    ) -> Result<Phase> {
        let mut input = INPUT_OFFSET;
        let mut output = OUTPUT_OFFSET;

        for _ in 0..GROUPS_PER_SUB_BLOCK {
            let ws = &mut self.workspace;
            synthesis_transform(ws, input, slots, phase)?;
            window(ws, phase, slots.current(), output)?;
            apply_gain(ws, output, HEAD_SAMPLES, gains.primary)?;
            apply_gain(ws, output + TAIL_OFFSET, TAIL_SAMPLES, gains.tail_gain(phase))?;

            phase = phase.rotate_back();
            slots.swap();
            input += GROUP_BYTES;
            output += GROUP_BYTES;
        }
        Ok(phase)
    }
}

impl Default for SynthesisDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}
