//! External memory seam
//!
//! The decoder never reaches into caller memory directly. It only performs
//! bounded bulk copies through [`ExternalMemory`], which callers implement for
//! whatever owns their address space. Implementations are provided for plain
//! byte slices, `Vec<u8>` and [`bytes::BytesMut`].

use crate::error::Result;
use crate::utils::check_external_range;
use bytes::BytesMut;

/// Flat byte-addressable memory owned by the caller
pub trait ExternalMemory {
    /// Size of the addressable range in bytes
    fn size(&self) -> usize;

    /// Copy `dst.len()` bytes starting at `address` into `dst`
    ///
    /// # Errors
    ///
    /// Returns [`crate::SynthError::ExternalOutOfBounds`] if the range does not fit.
    fn read_bytes(&self, address: u32, dst: &mut [u8]) -> Result<()>;

    /// Copy `src` into memory starting at `address`
    ///
    /// # Errors
    ///
    /// Returns [`crate::SynthError::ExternalOutOfBounds`] if the range does not fit.
    fn write_bytes(&mut self, address: u32, src: &[u8]) -> Result<()>;

    /// Check that `len` bytes starting at `address` are addressable
    fn check_range(&self, address: u32, len: usize) -> Result<()> {
        check_external_range(address, len, self.size()).map(|_| ())
    }
}

impl ExternalMemory for [u8] {
    fn size(&self) -> usize {
        self.len()
    }

    fn read_bytes(&self, address: u32, dst: &mut [u8]) -> Result<()> {
        let range = check_external_range(address, dst.len(), self.len())?;
        dst.copy_from_slice(&self[range]);
        Ok(())
    }

    fn write_bytes(&mut self, address: u32, src: &[u8]) -> Result<()> {
        let range = check_external_range(address, src.len(), self.len())?;
        self[range].copy_from_slice(src);
        Ok(())
    }
}

impl ExternalMemory for Vec<u8> {
    fn size(&self) -> usize {
        self.len()
    }

    fn read_bytes(&self, address: u32, dst: &mut [u8]) -> Result<()> {
        self.as_slice().read_bytes(address, dst)
    }

    fn write_bytes(&mut self, address: u32, src: &[u8]) -> Result<()> {
        self.as_mut_slice().write_bytes(address, src)
    }
}

impl ExternalMemory for BytesMut {
    fn size(&self) -> usize {
        self.len()
    }

    fn read_bytes(&self, address: u32, dst: &mut [u8]) -> Result<()> {
        self[..].read_bytes(address, dst)
    }

    fn write_bytes(&mut self, address: u32, src: &[u8]) -> Result<()> {
        self[..].write_bytes(address, src)
    }
}
