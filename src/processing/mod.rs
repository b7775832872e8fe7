//! Subnet arithmetic.
//!
//! - [`calculator`] - network definition from address and mask
//! - [`hosts`] - bounded, lazy host address enumeration

mod calculator;
mod hosts;

// Re-export public functions
pub use calculator::derive;
pub use hosts::{check_host_count, enumerate_hosts, HostAddressSequence};
