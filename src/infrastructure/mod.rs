//! Infrastructure layer - External concerns
//!
//! This module contains the HTTP surface that exposes the validation use cases.

pub mod http;
