//! Utility functions shared across the synthesis core

pub mod validation;

pub use validation::{
    check_external_range, check_sample_offset, check_workspace_range, offset_address,
};
