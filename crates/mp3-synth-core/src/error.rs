//! Error handling for the synthesis core
//!
//! The filter bank itself never fails: once a frame is accepted it runs to
//! completion over fixed-point arithmetic. Every error below is a caller
//! contract violation detected before memory is touched.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for synthesis operations
pub type Result<T> = std::result::Result<T, SynthError>;

/// Error type for synthesis operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// A 16-bit sample access at an odd workspace offset
    #[error("Misaligned sample access at workspace offset {offset:#06x}")]
    MisalignedSample { offset: usize },

    /// A workspace access or transfer that does not fit in the workspace
    #[error("Workspace access out of bounds: {len} bytes at {offset:#06x} (capacity {capacity:#06x})")]
    WorkspaceOutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    /// An external memory transfer that does not fit in the caller's buffer
    #[error("External memory access out of bounds: {len} bytes at {address:#010x} (capacity {capacity:#x})")]
    ExternalOutOfBounds {
        address: u32,
        len: usize,
        capacity: usize,
    },

    /// An external address plus offset that does not fit in 32 bits
    #[error("External address overflow: {offset:#x} bytes past {address:#010x}")]
    AddressOverflow { address: u32, offset: usize },

    /// A phase index outside 0..16
    #[error("Invalid phase index: {phase} (must be 0-15)")]
    InvalidPhase { phase: u8 },

    /// A dewindow table lookup running past the end of the table
    #[error("Dewindow table lookup out of range at entry {offset:#05x}")]
    TableOutOfRange { offset: usize },
}

impl SynthError {
    /// Create a new external out-of-bounds error
    pub fn external_out_of_bounds(address: u32, len: usize, capacity: usize) -> Self {
        Self::ExternalOutOfBounds {
            address,
            len,
            capacity,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPhase { .. } => ErrorCategory::Configuration,

            Self::WorkspaceOutOfBounds { .. }
            | Self::ExternalOutOfBounds { .. }
            | Self::AddressOverflow { .. } => ErrorCategory::Memory,

            Self::MisalignedSample { .. } | Self::TableOutOfRange { .. } => {
                ErrorCategory::Processing
            }
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration and parameter errors
    Configuration,
    /// Memory range errors
    Memory,
    /// Sample addressing errors inside the pipeline
    Processing,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Memory => write!(f, "Memory"),
            Self::Processing => write!(f, "Processing"),
        }
    }
}
