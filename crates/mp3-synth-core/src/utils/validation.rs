//! Precondition checks for memory accesses
//!
//! The firmware trusts its caller on alignment and bounds. These checks turn
//! each of those assumptions into an explicit error.

use crate::error::{Result, SynthError};

/// Validate a 16-bit sample offset into a region of `capacity` bytes
pub fn check_sample_offset(offset: usize, capacity: usize) -> Result<()> {
    if offset & 1 != 0 {
        return Err(SynthError::MisalignedSample { offset });
    }
    check_workspace_range(offset, 2, capacity)
}

/// Validate that `len` bytes starting at `offset` fit in a region of `capacity` bytes
pub fn check_workspace_range(offset: usize, len: usize, capacity: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(SynthError::WorkspaceOutOfBounds {
            offset,
            len,
            capacity,
        }),
    }
}

/// Validate an external transfer and return the byte range it covers
pub fn check_external_range(
    address: u32,
    len: usize,
    capacity: usize,
) -> Result<std::ops::Range<usize>> {
    let start = address as usize;
    match start.checked_add(len) {
        Some(end) if end <= capacity => Ok(start..end),
        _ => Err(SynthError::external_out_of_bounds(address, len, capacity)),
    }
}

/// Advance an external address by `offset` bytes without leaving the 32-bit space
pub fn offset_address(address: u32, offset: usize) -> Result<u32> {
    u32::try_from(offset)
        .ok()
        .and_then(|offset| address.checked_add(offset))
        .ok_or(SynthError::AddressOverflow { address, offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_offset_alignment() {
        assert!(check_sample_offset(0, 0x1000).is_ok());
        assert!(check_sample_offset(0xffe, 0x1000).is_ok());
        assert_eq!(
            check_sample_offset(0x101, 0x1000),
            Err(SynthError::MisalignedSample { offset: 0x101 })
        );
    }

    #[test]
    fn test_sample_offset_bounds() {
        assert!(matches!(
            check_sample_offset(0x1000, 0x1000),
            Err(SynthError::WorkspaceOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_workspace_range() {
        assert!(check_workspace_range(0xe70, 0x180, 0x1000).is_ok());
        assert!(check_workspace_range(0x1000, 0, 0x1000).is_ok());
        assert!(check_workspace_range(0xf00, 0x101, 0x1000).is_err());
        assert!(check_workspace_range(usize::MAX, 2, 0x1000).is_err());
    }

    #[test]
    fn test_external_range() {
        assert_eq!(check_external_range(8, 0x10, 0x18), Ok(8..0x18));
        assert_eq!(
            check_external_range(9, 0x10, 0x18),
            Err(SynthError::ExternalOutOfBounds {
                address: 9,
                len: 0x10,
                capacity: 0x18
            })
        );
    }

    #[test]
    fn test_offset_address() {
        assert_eq!(offset_address(0x100, 0x488), Ok(0x588));
        assert_eq!(offset_address(u32::MAX - 8, 8), Ok(u32::MAX));
        assert_eq!(
            offset_address(u32::MAX - 4, 8),
            Err(SynthError::AddressOverflow {
                address: u32::MAX - 4,
                offset: 8
            })
        );
        assert!(offset_address(0, usize::MAX).is_err());
    }
}
