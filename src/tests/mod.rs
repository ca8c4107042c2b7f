//! Crate-level tests for the Goldflake generator

pub mod test_utils;

mod core_tests;
