//! Application layer - Use cases
//!
//! This module contains the use cases that orchestrate domain validation
//! for the HTTP surface.

pub mod use_cases;

pub use use_cases::*;
