//! Lazy enumeration of usable host addresses.

use crate::error::HostRequestError;
use crate::models::NetworkDefinition;
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// Ascending host addresses starting at network address + 1.
///
/// Produced by [`enumerate_hosts`]; never reaches the broadcast address.
#[derive(Debug, Clone)]
pub struct HostAddressSequence {
    next: u32,
    remaining: u32,
}

impl Iterator for HostAddressSequence {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.remaining == 0 {
            return None;
        }
        let addr = Ipv4Addr::from(self.next);
        self.remaining -= 1;
        self.next += 1;
        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HostAddressSequence {}

impl FusedIterator for HostAddressSequence {}

/// Check a raw host count request against `def`.
///
/// Accepted counts satisfy `0 < count < usable_hosts`. The upper bound is
/// strict: the usable host count itself is refused.
pub fn check_host_count(def: &NetworkDefinition, count: i64) -> Result<u32, HostRequestError> {
    let usable_hosts = def.usable_hosts().ok_or(HostRequestError::NotApplicable)?;
    match u32::try_from(count) {
        Ok(n) if n > 0 && u64::from(n) < usable_hosts => Ok(n),
        _ => {
            log::debug!("check_host_count({count}) refused for {def}, usable {usable_hosts}");
            Err(HostRequestError::OutOfRange {
                requested: count,
                usable_hosts,
            })
        }
    }
}

/// The first `count` usable host addresses of `def`, in ascending order.
///
/// # Examples
/// ```
/// use subnet_calc::processing::{derive, enumerate_hosts};
/// let def = derive("8.8.8.8".parse().unwrap(), "255.255.255.0".parse().unwrap());
/// let hosts: Vec<String> = enumerate_hosts(&def, 2).unwrap().map(|h| h.to_string()).collect();
/// assert_eq!(hosts, vec!["8.8.8.1", "8.8.8.2"]);
/// ```
pub fn enumerate_hosts(
    def: &NetworkDefinition,
    count: u32,
) -> Result<HostAddressSequence, HostRequestError> {
    let count = check_host_count(def, i64::from(count))?;
    let first = u32::from(def.network_address()) + 1;
    log::debug!("enumerate_hosts({def}, {count}) starting at {}", Ipv4Addr::from(first));
    Ok(HostAddressSequence {
        next: first,
        remaining: count,
    })
}
