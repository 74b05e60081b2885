//! Governance tooling for the Neo-Analog design system.
//!
//! Two jobs: extract the semantic class vocabulary from a stylesheet into a
//! headless JSON map, and find drift (arbitrary utility values) in sources.

pub mod config;
pub mod drift;
pub mod error;
pub mod generate;
pub mod headless;
pub mod style;
pub mod tokens;

pub use error::{Error, Result};
