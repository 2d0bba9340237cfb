//! Shared test utilities for astrolex integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders leak their data into `'static` so custom
//! glossaries look exactly like the built-in one to the code under test.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
