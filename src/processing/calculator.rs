//! Network derivation from a validated address and mask.

use crate::models::{
    broadcast_addr, cut_addr, num_usable_hosts, HostRoute, Ipv4Address, Ipv4Mask,
    NetworkDefinition, Subnet,
};

/// Derive the network definition for `address` under `mask`.
///
/// A /32 mask yields [`NetworkDefinition::HostRoute`]; every other prefix
/// yields a [`NetworkDefinition::Subnet`] with network, broadcast, wildcard
/// and usable host count.
///
/// # Examples
/// ```
/// use subnet_calc::processing::derive;
/// let def = derive("8.8.8.8".parse().unwrap(), "255.255.255.0".parse().unwrap());
/// assert_eq!(def.usable_hosts(), Some(254));
/// ```
pub fn derive(address: Ipv4Address, mask: Ipv4Mask) -> NetworkDefinition {
    let prefix_len = mask.prefix_len();
    let usable_hosts = match num_usable_hosts(prefix_len) {
        Some(n) => n,
        None => {
            log::info!("derive({address} {mask}) -> /32 host route");
            return NetworkDefinition::HostRoute(HostRoute {
                address,
                prefix_len,
            });
        }
    };

    let subnet = Subnet {
        address,
        mask,
        network_address: cut_addr(address.addr(), mask),
        broadcast_address: broadcast_addr(address.addr(), mask),
        wildcard_mask: mask.wildcard(),
        prefix_len,
        usable_hosts,
    };
    log::info!(
        "derive({address} {mask}) -> {}/{prefix_len} broadcast {} hosts {usable_hosts}",
        subnet.network_address,
        subnet.broadcast_address
    );
    NetworkDefinition::Subnet(subnet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn derive_str(addr: &str, mask: &str) -> NetworkDefinition {
        derive(addr.parse().unwrap(), mask.parse().unwrap())
    }

    fn subnet(def: NetworkDefinition) -> Subnet {
        match def {
            NetworkDefinition::Subnet(s) => s,
            NetworkDefinition::HostRoute(h) => panic!("unexpected host route {h:?}"),
        }
    }

    #[test]
    fn test_derive_slash_24() {
        let s = subnet(derive_str("8.8.8.8", "255.255.255.0"));
        assert_eq!(s.network_address, Ipv4Addr::new(8, 8, 8, 0));
        assert_eq!(s.broadcast_address, Ipv4Addr::new(8, 8, 8, 255));
        assert_eq!(s.wildcard_mask, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(s.prefix_len, 24);
        assert_eq!(s.usable_hosts, 254);
        assert_eq!(s.address.to_string(), "8.8.8.8");
    }

    #[test]
    fn test_derive_invariants() {
        let cases = [
            ("10.18.126.77", "255.255.254.0"),
            ("192.168.1.42", "255.255.255.252"),
            ("172.31.200.1", "255.240.0.0"),
            ("8.8.8.8", "255.0.0.0"),
        ];
        for (addr, mask) in cases {
            let s = subnet(derive_str(addr, mask));
            let mask_bits = s.mask.to_bits();
            assert_eq!(
                u32::from(s.network_address),
                s.address.to_bits() & mask_bits
            );
            assert_eq!(
                u32::from(s.broadcast_address),
                u32::from(s.network_address) | u32::from(s.wildcard_mask)
            );
            assert_eq!(
                u64::from(u32::from(s.broadcast_address) - u32::from(s.network_address)) - 1,
                s.usable_hosts
            );
        }
    }

    #[test]
    fn test_derive_host_route() {
        let def = derive_str("8.8.8.8", "255.255.255.255");
        assert!(def.is_host_route());
        assert_eq!(def.usable_hosts(), None);
        assert_eq!(def.prefix_len(), 32);
        assert_eq!(def.network_address(), Ipv4Addr::new(8, 8, 8, 8));
        assert_eq!(def.to_string(), "8.8.8.8/32");
    }

    #[test]
    fn test_derive_slash_31_and_slash_0() {
        let s = subnet(derive_str("10.0.0.1", "255.255.255.254"));
        assert_eq!(s.network_address, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(s.broadcast_address, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(s.usable_hosts, 0);

        let s = subnet(derive_str("8.8.8.8", "0.0.0.0"));
        assert_eq!(s.network_address, Ipv4Addr::UNSPECIFIED);
        assert_eq!(s.broadcast_address, Ipv4Addr::BROADCAST);
        assert_eq!(s.wildcard_mask, Ipv4Addr::BROADCAST);
        assert_eq!(s.usable_hosts, 4294967294);
    }

    #[test]
    fn test_derive_is_idempotent() {
        let addr: Ipv4Address = "172.16.5.4".parse().unwrap();
        let mask: Ipv4Mask = "255.255.248.0".parse().unwrap();
        assert_eq!(derive(addr, mask), derive(addr, mask));
    }
}
