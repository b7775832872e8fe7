//! Network definition derived from an address and a mask.

use super::{Ipv4Address, Ipv4Mask};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Boundary addresses and host count of a /0 to /31 network.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// The address the network was derived from.
    pub address: Ipv4Address,
    pub mask: Ipv4Mask,
    /// address AND mask.
    pub network_address: Ipv4Addr,
    /// network_address OR wildcard_mask.
    pub broadcast_address: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub prefix_len: u8,
    /// 2^(32 - prefix_len) - 2.
    pub usable_hosts: u64,
}

/// A /32: the address is the only member of its network.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct HostRoute {
    pub address: Ipv4Address,
    pub prefix_len: u8,
}

/// Result of [`crate::processing::derive`].
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NetworkDefinition {
    Subnet(Subnet),
    HostRoute(HostRoute),
}

impl NetworkDefinition {
    pub fn address(&self) -> Ipv4Address {
        match self {
            NetworkDefinition::Subnet(s) => s.address,
            NetworkDefinition::HostRoute(h) => h.address,
        }
    }

    /// For a host route this is the address itself.
    pub fn network_address(&self) -> Ipv4Addr {
        match self {
            NetworkDefinition::Subnet(s) => s.network_address,
            NetworkDefinition::HostRoute(h) => h.address.addr(),
        }
    }

    pub fn prefix_len(&self) -> u8 {
        match self {
            NetworkDefinition::Subnet(s) => s.prefix_len,
            NetworkDefinition::HostRoute(h) => h.prefix_len,
        }
    }

    /// `None` for a host route.
    pub fn usable_hosts(&self) -> Option<u64> {
        match self {
            NetworkDefinition::Subnet(s) => Some(s.usable_hosts),
            NetworkDefinition::HostRoute(_) => None,
        }
    }

    pub fn is_host_route(&self) -> bool {
        matches!(self, NetworkDefinition::HostRoute(_))
    }
}

impl std::fmt::Display for NetworkDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix_len())
    }
}
