// # ipaddress-core
//
// Address record for network interface configuration.
//
// ## Overview
//
// - **IpAddress**: one interface's family, prefix length and local, peer,
//   broadcast and gateway addresses
// - **derive_prefix_length_from_netmask**: dotted-decimal netmask to CIDR
//   prefix length, rejecting non-contiguous masks
// - **AddressConfig**: static configuration applied through the record
//   setters
//
// ## Scope
//
// This crate performs no network I/O and owns no threads. Callers obtain
// addresses elsewhere (DHCP, static configuration, tunnel negotiation) and
// program interfaces from the populated record. A record is a plain value;
// sharing it across threads needs external synchronization.

pub mod config;
pub mod error;
pub mod family;
pub mod netmask;
pub mod record;

// Re-export core types for convenience
pub use config::AddressConfig;
pub use error::{Error, Result};
pub use family::AddressFamily;
pub use netmask::{HOST_PREFIX_LENGTH, derive_prefix_length_from_netmask};
pub use record::IpAddress;
