//! Netmask to prefix length derivation
//!
//! A dotted-decimal IPv4 netmask is only accepted when its host part is of
//! the form 2^n - 1, i.e. the mask bits are contiguous from the top.

use std::net::Ipv4Addr;

use tracing::debug;

use crate::error::{Error, Result};

/// Prefix length reported when no netmask is given (host route)
pub const HOST_PREFIX_LENGTH: u8 = 32;

/// Derive a CIDR prefix length from a dotted-decimal IPv4 netmask.
///
/// An absent netmask yields [`HOST_PREFIX_LENGTH`]. A netmask that does not
/// parse, or whose set bits are not contiguous, is an
/// [`Error::InvalidArgument`].
///
/// # Example
///
/// ```rust
/// use ipaddress_core::derive_prefix_length_from_netmask;
///
/// assert_eq!(derive_prefix_length_from_netmask(Some("255.255.255.0")).unwrap(), 24);
/// assert_eq!(derive_prefix_length_from_netmask(None).unwrap(), 32);
/// assert!(derive_prefix_length_from_netmask(Some("255.255.255.1")).is_err());
/// ```
pub fn derive_prefix_length_from_netmask(netmask: Option<&str>) -> Result<u8> {
    let Some(netmask) = netmask else {
        return Ok(HOST_PREFIX_LENGTH);
    };

    let Ok(mask) = netmask.parse::<Ipv4Addr>().map(u32::from) else {
        debug!(netmask, "rejecting unparseable netmask");
        return Err(Error::invalid_argument(format!(
            "netmask is not dotted-decimal: {netmask}"
        )));
    };

    let host = !mask;
    if host & host.wrapping_add(1) != 0 {
        debug!(netmask, "rejecting non-contiguous netmask");
        return Err(Error::invalid_argument(format!(
            "netmask is not contiguous: {netmask}"
        )));
    }

    Ok(mask.count_ones() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_netmasks() {
        let cases = [
            ("255.255.255.255", 32),
            ("255.255.255.254", 31),
            ("255.255.255.0", 24),
            ("255.255.240.0", 20),
            ("255.255.0.0", 16),
            ("255.0.0.0", 8),
            ("128.0.0.0", 1),
            ("0.0.0.0", 0),
        ];

        for (netmask, expected) in cases {
            assert_eq!(
                derive_prefix_length_from_netmask(Some(netmask)).unwrap(),
                expected,
                "netmask {netmask}"
            );
        }
    }

    #[test]
    fn test_absent_netmask_is_host_route() {
        assert_eq!(derive_prefix_length_from_netmask(None).unwrap(), 32);
    }

    #[test]
    fn test_non_contiguous_netmask() {
        for netmask in ["255.255.255.1", "255.0.255.0", "0.255.255.255", "254.255.255.0"] {
            let err = derive_prefix_length_from_netmask(Some(netmask)).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "netmask {netmask}");
        }
    }

    #[test]
    fn test_unparseable_netmask() {
        for netmask in ["", "not-a-mask", "255.255", "255.255.255.256", "ffff::"] {
            let err = derive_prefix_length_from_netmask(Some(netmask)).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "netmask {netmask:?}");
        }
    }
}
