//! Fixtures shared by the integration tests of the workspace.

pub mod patterns;
pub mod tagged;
