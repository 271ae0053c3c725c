//! Shared fixtures for integration tests

pub mod mock_systems;
pub mod test_helpers;

#[allow(unused_imports)]
pub use mock_systems::{ConstantGrowth, ExponentialDecay};
