//! IPv4 subnet calculator.
//!
//! Validates a unicast address and a dotted-quad subnet mask, derives the
//! network definition and enumerates usable hosts on request. The pipeline
//! is pure: [`validation`] -> [`processing::derive`] ->
//! [`processing::enumerate_hosts`]. [`shell`] is the interactive caller.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;
pub mod validation;

pub use error::{HostRequestError, InvalidAddress, InvalidMask};
pub use models::{Ipv4Address, Ipv4Mask, NetworkDefinition};
pub use processing::{derive, enumerate_hosts, HostAddressSequence};
pub use validation::{validate_address, validate_mask};
