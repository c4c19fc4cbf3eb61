// Shared test support code for scenario tests.

pub mod common;
pub mod harness;

pub use common::*;
pub use harness::{implementations, init_test_logger, run_parallel, DynMap};
