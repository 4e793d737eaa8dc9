//! Fixed-point polyphase synthesis filter bank
//!
//! Reconstructs PCM from 32-band subband samples, bit-exact with the audio
//! microcode's MP3 routine.
//!
//! # Architecture
//!
//! - `fixed_point`: the two multiply conventions and saturation
//! - `tables`: transform weights and the dewindow table
//! - `workspace`: the 4 KiB scratch region and its sample accessor
//! - `butterfly`: the 16-point butterfly network
//! - `transform`: 32-point transform into the history slots
//! - `window`: dewindowing and overlap-add into PCM
//! - `gain`: saturating output gain
//! - `decoder`: the frame driver tying the stages together

pub mod butterfly;
pub mod decoder;
pub mod fixed_point;
pub mod gain;
pub mod tables;
pub mod transform;
pub mod window;
pub mod workspace;

#[cfg(test)]
mod tests;

pub use decoder::{SynthesisDecoder, FRAME_BYTES, FRAME_INPUT_BYTES};
pub use transform::HistorySlots;
pub use workspace::Workspace;
