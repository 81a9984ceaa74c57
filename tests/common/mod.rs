//! Common test utilities


pub use test_utils::{assert_float_eq, sample_sweep};
