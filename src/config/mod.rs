//! # widerow Configuration Module
//!
//! This module centralizes the configuration constants for widerow. Constants
//! are grouped by functional area and interdependencies are enforced through
//! compile-time assertions.
//!
//! ## Module Organization
//!
//! - [`constants`]: Mapping-spec syntax, default encodings, inline capacities

pub mod constants;
pub use constants::*;
