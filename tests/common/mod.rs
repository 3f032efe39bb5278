//! Common test utilities for gazette-dl integration tests

#[allow(dead_code)]
pub mod fixtures;
#[allow(dead_code)]
pub mod portal;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use portal::*;
