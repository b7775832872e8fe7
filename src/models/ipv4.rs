//! IPv4 address and subnet mask primitives.
//!
//! Provides [`Ipv4Address`] (a validated unicast address) and [`Ipv4Mask`]
//! (a validated contiguous mask), along with the bit helpers used by the
//! subnet calculator.

use crate::error::InvalidMask;
use crate::validation::{validate_address, validate_mask};
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Four groups of one to three decimal digits separated by dots.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").expect("Invalid Regex")
    })
}

/// Split a dotted-quad string into its four numeric groups.
///
/// Groups are not range checked, `"300.1.2.3"` yields `[300, 1, 2, 3]`.
/// Returns `None` when the string is not four groups of 1-3 digits.
pub fn split_dotted_quad(raw: &str) -> Option<[u16; 4]> {
    let caps = get_dotted_quad_regex().captures(raw)?;
    let mut groups = [0u16; 4];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = caps.get(i + 1)?.as_str().parse().ok()?;
    }
    Some(groups)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Some(mask as u32)
    }
}

/// Get the network address of `addr` under `mask`.
pub fn cut_addr(addr: Ipv4Addr, mask: Ipv4Mask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask.to_bits())
}

/// Calculate the broadcast address of `addr` under `mask`.
pub fn broadcast_addr(addr: Ipv4Addr, mask: Ipv4Mask) -> Ipv4Addr {
    let network_bits = u32::from(cut_addr(addr, mask));
    Ipv4Addr::from(network_bits | !mask.to_bits())
}

/// Number of usable host addresses for a prefix length, excluding the
/// network and broadcast addresses.
///
/// A /31 yields 0. Returns `None` for /32, which has no host range.
pub fn num_usable_hosts(len: u8) -> Option<u64> {
    if len >= MAX_LENGTH {
        None
    } else {
        Some((1u64 << (MAX_LENGTH - len)) - 2)
    }
}

/// A validated IPv4 unicast address.
///
/// Only obtainable through [`validate_address`] (or its [`FromStr`] wrapper).
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Address {
    addr: Ipv4Addr,
}

impl Ipv4Address {
    pub(crate) fn from_validated(addr: Ipv4Addr) -> Self {
        Ipv4Address { addr }
    }

    /// The address as a standard library value.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn to_bits(&self) -> u32 {
        u32::from(self.addr)
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Ipv4Addr {
        address.addr
    }
}

impl FromStr for Ipv4Address {
    type Err = crate::error::InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_address(s)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.addr)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.addr.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        validate_address(&s)
            .map_err(|e| de::Error::custom(format!("invalid IP address {s}: {e}")))
    }
}

/// A validated subnet mask: a run of 1-bits from the most significant bit
/// followed only by 0-bits.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4Mask {
    bits: u32,
    prefix_len: u8,
}

impl Ipv4Mask {
    /// Build the mask with `len` leading 1-bits.
    pub fn from_prefix_len(len: u8) -> Result<Ipv4Mask, InvalidMask> {
        let bits = get_cidr_mask(len).ok_or(InvalidMask::NonContiguousBits)?;
        Ok(Ipv4Mask {
            bits,
            prefix_len: len,
        })
    }

    /// Count of leading 1-bits (0-32).
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn to_bits(&self) -> u32 {
        self.bits
    }

    /// The mask in dotted-quad form.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits)
    }

    /// Bitwise complement of the mask.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.bits)
    }
}

impl FromStr for Ipv4Mask {
    type Err = InvalidMask;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_mask(s)
    }
}

impl fmt::Display for Ipv4Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.addr())
    }
}

impl Serialize for Ipv4Mask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.addr().to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Mask {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Mask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        validate_mask(&s).map_err(|e| de::Error::custom(format!("invalid subnet mask {s}: {e}")))
    }
}
