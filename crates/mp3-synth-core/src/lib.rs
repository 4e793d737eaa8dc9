//! # MP3-Synth-Core: Fixed-Point MPEG Synthesis Filter Bank
//!
//! This library reproduces, bit for bit, the polyphase synthesis stage of the
//! N64 audio microcode's MP3 routine. It turns frames of 32-band subband
//! samples held in caller memory into 16-bit PCM, written back in place.
//!
//! ## Pipeline
//!
//! - **Transform**: a 32-point butterfly transform per group of 32 subband
//!   samples, feeding two alternating history slots
//! - **Window**: overlap-add of the newest history against a phase-rotated
//!   dewindow table
//! - **Gain**: saturating output gains taken from the frame header
//!
//! ## Usage
//!
//! ```rust
//! use mp3_synth_core::{DecoderConfig, Phase, SampleLayout, SynthesisDecoder};
//!
//! let config = DecoderConfig::new().with_layout(SampleLayout::WordSwapped);
//! let mut decoder = SynthesisDecoder::new(config);
//!
//! // 8-byte gain header followed by 0x480 bytes of subband samples
//! let mut memory = vec![0u8; 0x488];
//! let summary = decoder.decode_frame(&mut memory, 0, Phase::new(15)?)?;
//!
//! // The next frame continues from where this one left the phase
//! assert_eq!(summary.next_phase, Phase::new(13)?);
//! # Ok::<(), mp3_synth_core::SynthError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod memory;
pub mod synth;
pub mod types;
pub mod utils;

pub use error::{ErrorCategory, Result, SynthError};
pub use memory::ExternalMemory;
pub use synth::{SynthesisDecoder, FRAME_BYTES, FRAME_INPUT_BYTES};
pub use types::{DecoderConfig, FrameSummary, GainPair, Phase, SampleLayout};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported external memory layouts
pub const SUPPORTED_LAYOUTS: &[SampleLayout] = &[SampleLayout::WordSwapped, SampleLayout::BigEndian];

/// Initialize the library
///
/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG` unless one is
/// already set. Safe to call multiple times.
///
/// # Errors
///
/// Currently infallible; the signature leaves room for table self-checks.
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    tracing::info!("MP3-Synth-Core v{} initialized", VERSION);
    tracing::info!(
        "Supported layouts: {:?}",
        SUPPORTED_LAYOUTS.iter().map(|l| l.name()).collect::<Vec<_>>()
    );

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_layouts: SUPPORTED_LAYOUTS.to_vec(),
        frame_input_bytes: FRAME_INPUT_BYTES,
        frame_output_bytes: FRAME_BYTES,
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// External memory layouts a decoder can be configured for
    pub supported_layouts: Vec<SampleLayout>,
    /// Bytes consumed per frame, header included
    pub frame_input_bytes: usize,
    /// PCM bytes produced per frame
    pub frame_output_bytes: usize,
}
