//! Static address configuration
//!
//! An [`AddressConfig`] describes how a record should be populated when the
//! address does not come from a dynamic source. It is validated up front and
//! then applied through the ordinary record setters.

use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;

use crate::error::{Error, Result};
use crate::family::AddressFamily;
use crate::netmask::derive_prefix_length_from_netmask;
use crate::record::IpAddress;

/// Static address configuration for one interface
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum AddressConfig {
    /// IPv4 address with a dotted-decimal netmask
    Ipv4 {
        /// Local address (e.g., "10.0.0.5")
        address: String,
        /// Netmask (e.g., "255.255.255.0"); absent means a host route
        #[serde(default)]
        netmask: Option<String>,
        /// Default gateway
        #[serde(default)]
        gateway: Option<String>,
        /// Point-to-point peer
        #[serde(default)]
        peer: Option<String>,
    },

    /// IPv6 address with an explicit prefix length
    Ipv6 {
        /// Local address (e.g., "2001:db8::5")
        address: String,
        /// Prefix length, 0 to 128
        prefix_length: u8,
        /// Default gateway
        #[serde(default)]
        gateway: Option<String>,
        /// Point-to-point peer
        #[serde(default)]
        peer: Option<String>,
    },

    /// No address; applying it clears the record
    #[default]
    Off,
}

impl AddressConfig {
    /// Decode a JSON-encoded configuration
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Family a record ends up with after [`AddressConfig::apply`].
    ///
    /// `None` for [`AddressConfig::Off`], which keeps the record's family.
    pub fn family(&self) -> Option<AddressFamily> {
        match self {
            AddressConfig::Ipv4 { .. } => Some(AddressFamily::Ipv4),
            AddressConfig::Ipv6 { .. } => Some(AddressFamily::Ipv6),
            AddressConfig::Off => None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self {
            AddressConfig::Ipv4 {
                address, netmask, ..
            } => {
                if address.is_empty() {
                    return Err(Error::invalid_argument("IPv4 address cannot be empty"));
                }
                derive_prefix_length_from_netmask(netmask.as_deref())?;
                Ok(())
            }
            AddressConfig::Ipv6 {
                address,
                prefix_length,
                ..
            } => {
                if address.parse::<Ipv6Addr>().is_err() {
                    return Err(Error::invalid_argument(format!(
                        "not an IPv6 address: {address}"
                    )));
                }
                if *prefix_length > AddressFamily::Ipv6.max_prefix_length() {
                    return Err(Error::invalid_argument(format!(
                        "IPv6 prefix length must be <= 128, got {prefix_length}"
                    )));
                }
                Ok(())
            }
            AddressConfig::Off => Ok(()),
        }
    }

    /// Validate, then populate `record`.
    ///
    /// On a validation failure the record is not modified.
    pub fn apply(&self, record: &mut IpAddress) -> Result<()> {
        self.validate()?;

        match self {
            AddressConfig::Ipv4 {
                address,
                netmask,
                gateway,
                peer,
            } => {
                record.set_ipv4(Some(address.as_str()), netmask.as_deref(), gateway.as_deref())?;
                record.set_peer(peer.as_deref())
            }
            AddressConfig::Ipv6 {
                address,
                prefix_length,
                gateway,
                peer,
            } => {
                record.set_ipv6(Some(address.as_str()), *prefix_length, gateway.as_deref())?;
                record.set_peer(peer.as_deref())
            }
            AddressConfig::Off => {
                record.clear();
                Ok(())
            }
        }
    }
}
