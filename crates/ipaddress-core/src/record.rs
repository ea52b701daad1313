// # Address Record
//
// One interface's address configuration: family, prefix length and the
// local, peer, broadcast and gateway addresses in presentation form.
//
// ## Ownership
//
// Every string field is an owned `Option<String>`. Assigning a new value
// drops the previous buffer in the same step, so a record never holds a
// released buffer. Absence (`None`) is distinct from an empty string.
//
// ## Validation Order
//
// Setters validate and copy their inputs before touching the record. A
// failed call leaves the record exactly as it was.
//
// ## Absent Records
//
// The free functions at the bottom of this module accept
// `Option<&mut IpAddress>` for callers that may not hold a record. The
// IPv4/IPv6 setters report an absent record as `InvalidArgument`; the peer
// and broadcast setters, `clear` and `copy_address` treat it as a no-op.

use std::net::Ipv6Addr;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::family::AddressFamily;
use crate::netmask::derive_prefix_length_from_netmask;

/// Address configuration record for one network interface
///
/// `Clone` is the full clone. [`IpAddress::copy_address_from`] is the
/// partial copy that moves only family, prefix length and local address.
///
/// # Example
///
/// ```rust
/// use ipaddress_core::{AddressFamily, IpAddress};
///
/// let mut record = IpAddress::new(AddressFamily::Unspecified);
/// record
///     .set_ipv4(Some("10.0.0.5"), Some("255.255.255.0"), Some("10.0.0.1"))
///     .unwrap();
///
/// assert_eq!(record.family(), AddressFamily::Ipv4);
/// assert_eq!(record.prefix_length(), 24);
/// assert_eq!(record.local(), Some("10.0.0.5"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IpAddress {
    family: AddressFamily,
    prefix_length: u8,
    local: Option<String>,
    peer: Option<String>,
    broadcast: Option<String>,
    gateway: Option<String>,
}

impl IpAddress {
    /// Create a record with the given family, prefix length 0 and every
    /// address absent.
    ///
    /// No heap memory is taken here; allocation failures can only surface
    /// later, when a setter copies a string into the record.
    pub fn new(family: AddressFamily) -> Self {
        Self {
            family,
            ..Self::default()
        }
    }

    /// Address family
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Prefix length; 0 when unset
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Local address
    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    /// Point-to-point peer address
    pub fn peer(&self) -> Option<&str> {
        self.peer.as_deref()
    }

    /// Broadcast address
    pub fn broadcast(&self) -> Option<&str> {
        self.broadcast.as_deref()
    }

    /// Default gateway
    pub fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    /// Set IPv4 address data.
    ///
    /// The prefix length is derived from `netmask` (absent means 32). The
    /// address itself is stored without syntax checks. An absent gateway
    /// clears the stored one.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the netmask is malformed
    /// - [`Error::AllocationFailure`] if a string copy fails
    pub fn set_ipv4(
        &mut self,
        address: Option<&str>,
        netmask: Option<&str>,
        gateway: Option<&str>,
    ) -> Result<()> {
        let prefix_length = derive_prefix_length_from_netmask(netmask)?;
        let local = duplicate(address)?;
        let gateway_copy = duplicate(gateway)?;

        debug!(prefix_length, ?address, ?gateway, "setting ipv4 address");

        self.family = AddressFamily::Ipv4;
        self.prefix_length = prefix_length;
        self.local = local;
        self.gateway = gateway_copy;

        Ok(())
    }

    /// Set IPv6 address data.
    ///
    /// `prefix_length` is stored as given. An absent gateway clears the
    /// stored one.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `address` is absent or not valid
    ///   IPv6 text notation
    /// - [`Error::AllocationFailure`] if a string copy fails
    pub fn set_ipv6(
        &mut self,
        address: Option<&str>,
        prefix_length: u8,
        gateway: Option<&str>,
    ) -> Result<()> {
        let address = check_ipv6_address(address)?;
        let local = duplicate(Some(address))?;
        let gateway_copy = duplicate(gateway)?;

        debug!(prefix_length, address, ?gateway, "setting ipv6 address");

        self.family = AddressFamily::Ipv6;
        self.prefix_length = prefix_length;
        self.local = local;
        self.gateway = gateway_copy;

        Ok(())
    }

    /// Replace the point-to-point peer. `None` clears it.
    pub fn set_peer(&mut self, peer: Option<&str>) -> Result<()> {
        self.peer = duplicate(peer)?;
        Ok(())
    }

    /// Replace the broadcast address. `None` clears it.
    pub fn set_broadcast(&mut self, broadcast: Option<&str>) -> Result<()> {
        self.broadcast = duplicate(broadcast)?;
        Ok(())
    }

    /// Reset prefix length to 0 and drop all four addresses.
    ///
    /// `family` is kept.
    pub fn clear(&mut self) {
        trace!(family = %self.family, "clearing address record");

        self.prefix_length = 0;
        self.local = None;
        self.peer = None;
        self.broadcast = None;
        self.gateway = None;
    }

    /// Partial copy: take `family`, `prefix_length` and `local` from
    /// `source`.
    ///
    /// `peer`, `broadcast` and `gateway` on `self` are left alone. Use
    /// `clone()` for a full copy.
    pub fn copy_address_from(&mut self, source: &IpAddress) -> Result<()> {
        let local = duplicate(source.local())?;

        self.family = source.family;
        self.prefix_length = source.prefix_length;
        self.local = local;

        Ok(())
    }
}

/// Copy an optional string into a fresh owned buffer, reporting allocation
/// failure instead of aborting.
fn duplicate(value: Option<&str>) -> Result<Option<String>> {
    value.map(|value| copy_with_capacity(value, value.len())).transpose()
}

fn copy_with_capacity(value: &str, capacity: usize) -> Result<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(capacity)?;
    owned.push_str(value);
    Ok(owned)
}

fn check_ipv6_address(address: Option<&str>) -> Result<&str> {
    match address {
        Some(address) if address.parse::<Ipv6Addr>().is_ok() => Ok(address),
        Some(address) => {
            debug!(address, "rejecting malformed ipv6 address");
            Err(Error::invalid_argument(format!(
                "not an IPv6 address: {address}"
            )))
        }
        None => Err(Error::invalid_argument("IPv6 address is required")),
    }
}

/// Release a record and every address it owns.
///
/// `None` is a no-op. The record is moved in, so the same record cannot be
/// freed twice; holding a single owner is the caller's precondition.
pub fn free(record: Option<IpAddress>) {
    if let Some(record) = record {
        trace!(family = %record.family, "freeing address record");
        drop(record);
    }
}

/// [`IpAddress::set_ipv4`] on a possibly absent record.
///
/// An absent record is an [`Error::InvalidArgument`].
pub fn set_ipv4(
    record: Option<&mut IpAddress>,
    address: Option<&str>,
    netmask: Option<&str>,
    gateway: Option<&str>,
) -> Result<()> {
    let record = record.ok_or_else(|| Error::invalid_argument("no address record"))?;
    record.set_ipv4(address, netmask, gateway)
}

/// [`IpAddress::set_ipv6`] on a possibly absent record.
///
/// An absent record is an [`Error::InvalidArgument`].
pub fn set_ipv6(
    record: Option<&mut IpAddress>,
    address: Option<&str>,
    prefix_length: u8,
    gateway: Option<&str>,
) -> Result<()> {
    let record = record.ok_or_else(|| Error::invalid_argument("no address record"))?;
    record.set_ipv6(address, prefix_length, gateway)
}

/// [`IpAddress::set_peer`] on a possibly absent record. Absent is a no-op.
pub fn set_peer(record: Option<&mut IpAddress>, peer: Option<&str>) -> Result<()> {
    match record {
        Some(record) => record.set_peer(peer),
        None => Ok(()),
    }
}

/// [`IpAddress::set_broadcast`] on a possibly absent record. Absent is a
/// no-op.
pub fn set_broadcast(record: Option<&mut IpAddress>, broadcast: Option<&str>) -> Result<()> {
    match record {
        Some(record) => record.set_broadcast(broadcast),
        None => Ok(()),
    }
}

/// [`IpAddress::clear`] on a possibly absent record. Absent is a no-op.
pub fn clear(record: Option<&mut IpAddress>) {
    if let Some(record) = record {
        record.clear();
    }
}

/// Partial copy of family, prefix length and local address; see
/// [`IpAddress::copy_address_from`].
///
/// No-op when either side is absent.
pub fn copy_address(
    destination: Option<&mut IpAddress>,
    source: Option<&IpAddress>,
) -> Result<()> {
    match (destination, source) {
        (Some(destination), Some(source)) => destination.copy_address_from(source),
        _ => Ok(()),
    }
}
