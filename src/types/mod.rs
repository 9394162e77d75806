//! Common types used across the Globalization Pipeline client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
