//! Scratch workspace standing in for the firmware's on-chip memory
//!
//! A fixed 4 KiB byte region. Every 16-bit access goes through
//! [`Workspace::sample_at`] / [`Workspace::set_sample_at`], which apply the
//! layout's address XOR and byte order; nothing else in the pipeline indexes
//! the bytes directly. Bulk transfers move raw bytes to and from external
//! memory unchanged, so both sides share one layout.

use crate::error::Result;
use crate::memory::ExternalMemory;
use crate::types::SampleLayout;
use crate::utils::{check_sample_offset, check_workspace_range};
use std::fmt;

/// Workspace size in bytes
pub const WORKSPACE_SIZE: usize = 0x1000;

/// History slot that starts each frame as the "new" generation
pub const HISTORY_SLOT_A: usize = 0x8A0;
/// History slot that starts each frame as the "previous" generation
pub const HISTORY_SLOT_B: usize = 0xAC0;
/// Bytes per history slot: 17 tap rows of 0x20 bytes
pub const HISTORY_SLOT_SIZE: usize = 0x220;

/// One tap row: 16 phase columns of 16-bit samples
pub const TAP_ROW_STRIDE: usize = 0x20;
/// Two tap rows; even and odd transform passes each fill every other row
pub const TAP_PAIR_STRIDE: usize = 0x40;

/// Frame header holding the gain pair
pub const HEADER_OFFSET: usize = 0xCE8;
/// Frame header length
pub const HEADER_BYTES: usize = 8;

/// Subband input block
pub const INPUT_OFFSET: usize = 0xCF0;
/// PCM output block
pub const OUTPUT_OFFSET: usize = 0xE70;

/// Bytes moved per sub-block transfer (six 32-sample groups)
pub const SUB_BLOCK_BYTES: usize = 0x180;
/// Bytes per 32-sample group
pub const GROUP_BYTES: usize = 0x40;

/// Fixed-size byte workspace with layout-aware sample access
#[derive(Clone, PartialEq, Eq)]
pub struct Workspace {
    bytes: [u8; WORKSPACE_SIZE],
    layout: SampleLayout,
}

impl Workspace {
    /// Create a zeroed workspace
    pub fn new(layout: SampleLayout) -> Self {
        Self {
            bytes: [0; WORKSPACE_SIZE],
            layout,
        }
    }

    /// Byte-order convention in use
    pub fn layout(&self) -> SampleLayout {
        self.layout
    }

    /// Raw workspace bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Zero the whole workspace
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    #[inline]
    fn physical(&self, offset: usize) -> Result<usize> {
        check_sample_offset(offset, WORKSPACE_SIZE)?;
        Ok(offset ^ self.layout.address_xor())
    }

    /// Read the 16-bit sample at `offset`
    ///
    /// # Errors
    ///
    /// Fails if `offset` is odd or outside the workspace.
    #[inline]
    pub fn sample_at(&self, offset: usize) -> Result<i16> {
        let p = self.physical(offset)?;
        Ok(self.layout.decode([self.bytes[p], self.bytes[p + 1]]))
    }

    /// Write the 16-bit sample at `offset`
    ///
    /// # Errors
    ///
    /// Fails if `offset` is odd or outside the workspace.
    #[inline]
    pub fn set_sample_at(&mut self, offset: usize, value: i16) -> Result<()> {
        let p = self.physical(offset)?;
        let [b0, b1] = self.layout.encode(value);
        self.bytes[p] = b0;
        self.bytes[p + 1] = b1;
        Ok(())
    }

    /// Replace the sample at `offset` with `f(sample)`
    pub fn update_sample_at(&mut self, offset: usize, f: impl FnOnce(i16) -> i16) -> Result<()> {
        let value = self.sample_at(offset)?;
        self.set_sample_at(offset, f(value))
    }

    /// Read 16 consecutive samples starting at `offset`
    pub fn read_row(&self, offset: usize) -> Result<[i16; 16]> {
        let mut row = [0i16; 16];
        for (i, slot) in row.iter_mut().enumerate() {
            *slot = self.sample_at(offset + 2 * i)?;
        }
        Ok(row)
    }

    /// Copy `len` bytes from external memory at `address` into the workspace at `offset`
    pub fn bulk_load<M: ExternalMemory + ?Sized>(
        &mut self,
        memory: &M,
        address: u32,
        offset: usize,
        len: usize,
    ) -> Result<()> {
        check_workspace_range(offset, len, WORKSPACE_SIZE)?;
        tracing::trace!("load {:#x} bytes {:#010x} -> {:#05x}", len, address, offset);
        memory.read_bytes(address, &mut self.bytes[offset..offset + len])
    }

    /// Copy `len` bytes from the workspace at `offset` out to external memory at `address`
    pub fn bulk_store<M: ExternalMemory + ?Sized>(
        &self,
        offset: usize,
        memory: &mut M,
        address: u32,
        len: usize,
    ) -> Result<()> {
        check_workspace_range(offset, len, WORKSPACE_SIZE)?;
        tracing::trace!("store {:#x} bytes {:#05x} -> {:#010x}", len, offset, address);
        memory.write_bytes(address, &self.bytes[offset..offset + len])
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(SampleLayout::default())
    }
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("layout", &self.layout)
            .field("size", &WORKSPACE_SIZE)
            .field("nonzero_bytes", &self.bytes.iter().filter(|&&b| b != 0).count())
            .finish()
    }
}
