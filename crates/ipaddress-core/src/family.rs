//! Address family tag carried by every record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address family of a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// No family assigned yet
    #[default]
    Unspecified,
    /// IPv4
    Ipv4,
    /// IPv6
    Ipv6,
}

impl AddressFamily {
    /// Largest prefix length meaningful for this family
    pub fn max_prefix_length(self) -> u8 {
        match self {
            AddressFamily::Unspecified => 0,
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }

    /// Map a platform `AF_*` constant to a family.
    ///
    /// Returns `None` for families other than `AF_UNSPEC`, `AF_INET` and
    /// `AF_INET6`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            libc::AF_UNSPEC => Some(AddressFamily::Unspecified),
            libc::AF_INET => Some(AddressFamily::Ipv4),
            libc::AF_INET6 => Some(AddressFamily::Ipv6),
            _ => None,
        }
    }

    /// The platform `AF_*` constant for this family
    pub fn as_raw(self) -> i32 {
        match self {
            AddressFamily::Unspecified => libc::AF_UNSPEC,
            AddressFamily::Ipv4 => libc::AF_INET,
            AddressFamily::Ipv6 => libc::AF_INET6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressFamily::Unspecified => "unspec",
            AddressFamily::Ipv4 => "inet",
            AddressFamily::Ipv6 => "inet6",
        };
        f.write_str(name)
    }
}
