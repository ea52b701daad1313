//! Shared fixtures for address record contract tests

#![allow(dead_code)]

use ipaddress_core::{AddressFamily, IpAddress};

pub const LOCAL_V4: &str = "10.0.0.5";
pub const NETMASK_V4: &str = "255.255.255.0";
pub const GATEWAY_V4: &str = "10.0.0.1";
pub const PEER_V4: &str = "10.0.0.9";
pub const BROADCAST_V4: &str = "10.0.0.255";

/// A record populated through every setter
pub fn populated_ipv4_record() -> IpAddress {
    let mut record = IpAddress::new(AddressFamily::Unspecified);
    record
        .set_ipv4(Some(LOCAL_V4), Some(NETMASK_V4), Some(GATEWAY_V4))
        .expect("valid ipv4 data");
    record.set_peer(Some(PEER_V4)).expect("peer copy");
    record.set_broadcast(Some(BROADCAST_V4)).expect("broadcast copy");
    record
}

/// Assert that all four addresses are absent
pub fn assert_no_addresses(record: &IpAddress) {
    assert!(record.local().is_none(), "local: {:?}", record.local());
    assert!(record.peer().is_none(), "peer: {:?}", record.peer());
    assert!(record.broadcast().is_none(), "broadcast: {:?}", record.broadcast());
    assert!(record.gateway().is_none(), "gateway: {:?}", record.gateway());
}
