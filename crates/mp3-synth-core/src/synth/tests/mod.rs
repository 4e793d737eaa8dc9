//! Frame-level scenario tests for the synthesis pipeline

mod utils;

mod layout_tests;
