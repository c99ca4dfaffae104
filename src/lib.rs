// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Network-layer address values: IPv4, IPv6 and MAC addresses, plus CIDR
addresses and the networks derived from them.

All values are immutable, validated once at construction and render to a
single canonical string:
- IPv4: dotted quad, `127.0.0.1`
- IPv6: RFC 5952 compressed lowercase hex, `fe80::a65:78:0:22` (`::` for zero)
- MAC: six lowercase colon separated octets, `28:e5:65:78:00:22`
- CIDR / network: `<address>/<prefix>`

Free-form text of unknown kind can be classified with [parse_address].
*/

mod addresses;
mod cidr;
mod ipv4;
mod ipv6;
mod mac;
mod network;
mod serialization;
mod strings;

use std::{error, fmt};
use strings::*;

pub use addresses::{parse_address, AnyCidr, AnyIp, AnyNetwork, IpFam, NetworkAddress};
pub use cidr::{Cidr, IpAddress};
pub use ipv4::Ipv4Address;
pub use ipv6::Ipv6Address;
pub use mac::MacAddress;
pub use network::{Network, NetworkIter};

pub const IPV4_BITS: u8 = 32;
pub const IPV6_BITS: u8 = 128;
pub const MAC_BITS: u8 = 48;

/* ######################################################################### */

/// Common capability of every address value in this crate.
pub trait Address: fmt::Display {
    /// What kind of address this is.
    fn kind(&self) -> AddressKind;

    /// Canonical textual form. Same as `to_string()`.
    #[inline]
    fn render(&self) -> String {
        format!("{self}")
    }
}

/// The kind of value being parsed or held. Used for error reporting.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AddressKind {
    Ipv4,
    Ipv6,
    Mac,
    MacPrefix,
    CidrV4,
    CidrV6,
    /// CIDR of not-yet-known width
    Cidr,
    NetworkV4,
    NetworkV6,
    /// anything [parse_address] accepts
    Any,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &str = match self {
            AddressKind::Ipv4 => KIND_IPV4,
            AddressKind::Ipv6 => KIND_IPV6,
            AddressKind::Mac => KIND_MAC,
            AddressKind::MacPrefix => KIND_MAC_PREFIX,
            AddressKind::CidrV4 => KIND_CIDR_V4,
            AddressKind::CidrV6 => KIND_CIDR_V6,
            AddressKind::Cidr => KIND_CIDR,
            AddressKind::NetworkV4 => KIND_NET_V4,
            AddressKind::NetworkV6 => KIND_NET_V6,
            AddressKind::Any => KIND_ANY,
        };
        f.write_str(s)
    }
}

/* ######################################################################### */

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// text does not match the grammar of the address kind
    InvalidFormat { kind: AddressKind, input: String },
    /// numeric value (prefix length, byte count, raw value) is outside `0..=max`
    OutOfRange    { kind: AddressKind, value: i128, max: i128 },
}

impl AddressError {
    pub(crate) fn invalid(kind: AddressKind, input: impl Into<String>) -> Self {
        AddressError::InvalidFormat {
            kind,
            input: input.into(),
        }
    }

    pub(crate) fn out_of_range(kind: AddressKind, value: i128, max: i128) -> Self {
        AddressError::OutOfRange { kind, value, max }
    }

    /// The kind of address whose construction failed.
    pub fn kind(&self) -> AddressKind {
        match self {
            AddressError::InvalidFormat { kind, .. } | AddressError::OutOfRange { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidFormat { kind, input } => {
                write!(f, "{ERR_INVALID} {kind}: '{input}'")
            }
            AddressError::OutOfRange { kind, value, max } => {
                write!(f, "{ERR_OUT_OF_RANGE} {kind}: {value} (expected 0..={max})")
            }
        }
    }
}

impl error::Error for AddressError {}

/* ######################################################################### */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AddressError::invalid(AddressKind::Ipv4, "127.0.0");
        assert_eq!(err.to_string(), "invalid IPv4 address: '127.0.0'");
        assert_eq!(err.kind(), AddressKind::Ipv4);

        let err = AddressError::out_of_range(AddressKind::CidrV6, 129, 128);
        assert_eq!(err.to_string(), "value out of range for IPv6 CIDR: 129 (expected 0..=128)");
        assert_eq!(err.kind(), AddressKind::CidrV6);
    }

    #[test]
    fn test_render_matches_display() {
        let ip: Ipv4Address = "10.0.5.153".parse().unwrap();
        assert_eq!(ip.render(), ip.to_string());
        assert_eq!(ip.kind(), AddressKind::Ipv4);
    }
}
