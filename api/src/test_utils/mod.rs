//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are explicit and easy to configure per scenario
//! - Call counters let tests assert which collaborators were reached,
//!   which is how the short-circuit behavior of the pipeline is verified

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
