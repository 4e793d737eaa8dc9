//! Core types for the synthesis core
//!
//! Configuration, the rotating phase index, and the per-frame gain pair.

use crate::error::{Result, SynthError};
use std::fmt;

/// Number of overlap phases tracked by the window stage
pub const PHASE_COUNT: u8 = 16;

/// Byte-order convention of external memory (and therefore of the workspace)
///
/// The firmware addresses 16-bit samples in big-endian memory. Emulator hosts
/// usually keep that memory as native little-endian 32-bit words instead,
/// which swaps the two half-words of every word relative to natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleLayout {
    /// 32-bit words stored little-endian; sample `a` lives at byte `a ^ 2`.
    #[default]
    WordSwapped,
    /// Natural big-endian memory; sample `a` lives at byte `a`.
    BigEndian,
}

impl SampleLayout {
    /// XOR mask applied to a sample offset before it is dereferenced
    pub const fn address_xor(self) -> usize {
        match self {
            Self::WordSwapped => 2,
            Self::BigEndian => 0,
        }
    }

    /// Decode a 16-bit sample from its two stored bytes
    pub fn decode(self, bytes: [u8; 2]) -> i16 {
        match self {
            Self::WordSwapped => i16::from_le_bytes(bytes),
            Self::BigEndian => i16::from_be_bytes(bytes),
        }
    }

    /// Encode a 16-bit sample into its two stored bytes
    pub fn encode(self, value: i16) -> [u8; 2] {
        match self {
            Self::WordSwapped => value.to_le_bytes(),
            Self::BigEndian => value.to_be_bytes(),
        }
    }

    /// Get layout name
    pub fn name(self) -> &'static str {
        match self {
            Self::WordSwapped => "word-swapped",
            Self::BigEndian => "big-endian",
        }
    }
}

impl fmt::Display for SampleLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// Byte-order convention of the external memory the decoder talks to
    pub layout: SampleLayout,
}

impl DecoderConfig {
    /// Create a configuration with the default (word-swapped) layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the external memory layout
    pub fn with_layout(mut self, layout: SampleLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// Rotating phase index in `0..16`
///
/// Selects the rotation of the window table and the history column written by
/// one 32-sample group. It moves backward by one after every group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Phase(u8);

impl Phase {
    /// Create a phase, rejecting values outside `0..16`
    pub fn new(value: u8) -> Result<Self> {
        if value < PHASE_COUNT {
            Ok(Self(value))
        } else {
            Err(SynthError::InvalidPhase { phase: value })
        }
    }

    /// Raw phase value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether the phase is odd (selects the alternate gain and the crossover accumulator)
    pub const fn is_odd(self) -> bool {
        self.0 & 1 != 0
    }

    /// Phase of the next group: one step backward, wrapping 0 to 15
    #[must_use]
    pub const fn rotate_back(self) -> Self {
        Self(self.0.wrapping_sub(1) & (PHASE_COUNT - 1))
    }

    /// Phase reached after `steps` backward rotations
    #[must_use]
    pub const fn rotate_back_by(self, steps: usize) -> Self {
        let steps = (steps % PHASE_COUNT as usize) as u8;
        Self((self.0 + PHASE_COUNT - steps) & (PHASE_COUNT - 1))
    }
}

impl TryFrom<u8> for Phase {
    type Error = SynthError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.0
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two gain multipliers carried in a frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GainPair {
    /// Applied to the first 17 samples of every group and to the tail on even phases
    pub primary: i16,
    /// Applied to the tail 16 samples of a group on odd phases
    pub alternate: i16,
}

impl GainPair {
    /// Gain pair that leaves samples unchanged
    pub const IDENTITY: Self = Self {
        primary: 1,
        alternate: 1,
    };

    /// Create a gain pair
    pub const fn new(primary: i16, alternate: i16) -> Self {
        Self { primary, alternate }
    }

    /// Gain applied to the tail of a group running at `phase`
    pub const fn tail_gain(self, phase: Phase) -> i16 {
        if phase.is_odd() {
            self.alternate
        } else {
            self.primary
        }
    }
}

/// Outcome of one frame decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    /// Gains read from the frame header
    pub gains: GainPair,
    /// Phase the next frame should start with
    pub next_phase: Phase,
}
