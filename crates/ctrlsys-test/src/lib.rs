//! Test infrastructure for ControlSystem configuration tooling
//!
//! Provides:
//! - A builder that renders `ControlSystem` XML documents
//! - Fixtures for common valid and broken documents
//! - Helpers that parse the printed port report back into blocks

pub mod fixtures;
mod verification;

pub use fixtures::*;
pub use verification::*;
