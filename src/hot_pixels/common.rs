//! Common utilities module
//!
//! Shared error type and the fixed-point scale used by the detector.

pub mod error;
pub mod fixed_point;

pub use error::{DetectorError, Result};
pub use fixed_point::{DENOM, DENOM_SQRT, rel_to_abs};
