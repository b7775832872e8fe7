//! Subnet mask validation.

use crate::error::InvalidMask;
use crate::models::{get_cidr_mask, split_dotted_quad, Ipv4Mask};
use itertools::Itertools;

/// Octet values with a contiguous run of leading 1-bits: 255, 254, ..., 128, 0.
fn is_mask_octet(octet: u16) -> bool {
    (0..9).any(|shift| (255u16 << shift) & 255 == octet)
}

/// Parse `raw` as a dotted-quad subnet mask.
///
/// Every octet must be a contiguous-bit value, the octets must be
/// non-increasing from left to right and the first octet must be 255.
/// The all-zero mask is the one exception to the last rule and yields /0.
///
/// # Examples
/// ```
/// use subnet_calc::validation::validate_mask;
/// assert_eq!(validate_mask("255.255.255.0").unwrap().prefix_len(), 24);
/// ```
pub fn validate_mask(raw: &str) -> Result<Ipv4Mask, InvalidMask> {
    let raw = raw.trim();
    let octets = split_dotted_quad(raw).ok_or_else(|| {
        log::debug!("validate_mask({raw}) rejected: malformed");
        InvalidMask::MalformedSyntax
    })?;

    if let Some(octet) = octets.iter().find(|o| !is_mask_octet(**o)) {
        log::debug!("validate_mask({raw}) rejected: illegal octet {octet}");
        return Err(InvalidMask::IllegalOctetValue);
    }

    let non_increasing = octets.iter().tuple_windows().all(|(prev, next)| prev >= next);
    let anchored = octets[0] == 255 || octets == [0; 4];
    if !(non_increasing && anchored) {
        log::debug!("validate_mask({raw}) rejected: octets not descending from 255");
        return Err(InvalidMask::NonContiguousBits);
    }

    // 255.254.254.0 passes the octet rules but still has a gap.
    let bits = octets
        .iter()
        .fold(0u32, |bits, octet| (bits << 8) | u32::from(*octet));
    let prefix_len = bits.count_ones() as u8;
    if get_cidr_mask(prefix_len) != Some(bits) {
        log::debug!("validate_mask({raw}) rejected: gap in mask bits");
        return Err(InvalidMask::NonContiguousBits);
    }

    Ipv4Mask::from_prefix_len(prefix_len)
}
