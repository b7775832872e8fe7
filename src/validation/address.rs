//! Unicast address validation.

use crate::error::InvalidAddress;
use crate::models::Ipv4Address;
use std::net::{Ipv4Addr, Ipv6Addr};

/// 240.0.0.0/4, which also covers the limited broadcast address.
const RESERVED_PREFIX: u32 = 0xF000_0000;

/// Parse `raw` as a dotted-quad IPv4 address and apply the unicast policy.
///
/// Rejected, in this order:
/// * anything that is not an IPv4 address (IPv6 included)
/// * first octet 0 (0.0.0.0/8)
/// * link-local 169.254.0.0/16
/// * loopback 127.0.0.0/8
/// * multicast 224.0.0.0/4
/// * reserved 240.0.0.0/4
///
/// # Examples
/// ```
/// use subnet_calc::validation::validate_address;
/// use subnet_calc::error::InvalidAddress;
/// assert!(validate_address("8.8.8.8").is_ok());
/// assert_eq!(validate_address("127.0.0.1"), Err(InvalidAddress::Loopback));
/// ```
pub fn validate_address(raw: &str) -> Result<Ipv4Address, InvalidAddress> {
    let raw = raw.trim();
    let addr: Ipv4Addr = match raw.parse() {
        Ok(addr) => addr,
        Err(_) => {
            if raw.parse::<Ipv6Addr>().is_ok() {
                log::debug!("validate_address({raw}) rejected: IPv6 address");
            } else {
                log::debug!("validate_address({raw}) rejected: malformed");
            }
            return Err(InvalidAddress::MalformedSyntax);
        }
    };

    if let Err(reason) = check_unicast(addr) {
        log::debug!("validate_address({raw}) rejected: {reason}");
        return Err(reason);
    }

    Ok(Ipv4Address::from_validated(addr))
}

fn check_unicast(addr: Ipv4Addr) -> Result<(), InvalidAddress> {
    if addr.octets()[0] == 0 {
        Err(InvalidAddress::Reserved)
    } else if addr.is_link_local() {
        Err(InvalidAddress::LinkLocal)
    } else if addr.is_loopback() {
        Err(InvalidAddress::Loopback)
    } else if addr.is_multicast() {
        Err(InvalidAddress::Multicast)
    } else if u32::from(addr) & RESERVED_PREFIX == RESERVED_PREFIX {
        Err(InvalidAddress::Reserved)
    } else {
        Ok(())
    }
}
