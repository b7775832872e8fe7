//! Input validation for raw address and mask strings.
//!
//! - [`address`] - unicast address policy
//! - [`mask`] - contiguous subnet mask rules

mod address;
mod mask;

pub use address::validate_address;
pub use mask::validate_mask;
