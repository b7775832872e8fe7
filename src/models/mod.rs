//! Domain models for the subnet calculator.
//!
//! - [`Ipv4Address`] - validated unicast address
//! - [`Ipv4Mask`] - validated contiguous subnet mask
//! - [`NetworkDefinition`] - network derived from an address and a mask

mod ipv4;
mod network;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_usable_hosts, split_dotted_quad, Ipv4Address,
    Ipv4Mask, MAX_LENGTH,
};
pub use network::{HostRoute, NetworkDefinition, Subnet};
