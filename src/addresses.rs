// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    mac::MAC_FORMAT, strings::*, Address, AddressError, AddressKind, Cidr, Ipv4Address,
    Ipv6Address, MacAddress, Network,
};
use std::{fmt, str::FromStr};
use tracing::debug;

/**
Parse free-form text into whichever address kind it spells.

Classification order:
1. MAC pattern (6 hex octets, optionally `:` or `-` delimited)
2. contains `/`: CIDR, IPv6 if the address part contains `:`, else IPv4
3. bare IP address, IPv6 if it contains `:`, else IPv4

The MAC check must come first: `28:e5:65:78:00:22` also contains colons.
Text matching none of the shapes fails with [AddressError::InvalidFormat]
of kind [AddressKind::Any]. CIDR errors are returned as the CIDR parser
reports them, so an out of range prefix stays [AddressError::OutOfRange].
*/
pub fn parse_address(text: impl AsRef<str>) -> Result<NetworkAddress, AddressError> {
    let text: &str = text.as_ref();

    let result: Result<NetworkAddress, AddressError> = if MAC_FORMAT.is_match(text) {
        text.parse::<MacAddress>().map(NetworkAddress::Mac)
    } else if text.contains(SLASH) {
        text.parse::<AnyCidr>().map(NetworkAddress::from)
    } else {
        text.parse::<AnyIp>()
            .map(NetworkAddress::from)
            .map_err(|_| AddressError::invalid(AddressKind::Any, text))
    };

    if let Err(err) = &result {
        debug!(input = text, kind = %err.kind(), %err, "unrecognized network address");
    }
    result
}

/* -------------------------------------------------------------------------- */

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IpFam {
    V4,
    V6,
}

/// Width dispatch for the part of an address before any `/`.
#[inline]
fn family_of(addr: &str) -> IpFam {
    match addr.contains(COLON) {
        true => IpFam::V6,
        false => IpFam::V4,
    }
}

/* ---------------------------------- */

/// An IPv4 or IPv6 address.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AnyIp {
    V4(Ipv4Address),
    V6(Ipv6Address),
}

impl AnyIp {
    pub fn family(&self) -> IpFam {
        match self {
            AnyIp::V4(_) => IpFam::V4,
            AnyIp::V6(_) => IpFam::V6,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            AnyIp::V4(ip) => ip.is_null(),
            AnyIp::V6(ip) => ip.is_null(),
        }
    }

    /// 4 or 16 bytes, big-endian.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            AnyIp::V4(ip) => ip.to_bytes().to_vec(),
            AnyIp::V6(ip) => ip.to_bytes().to_vec(),
        }
    }
}

impl Address for AnyIp {
    fn kind(&self) -> AddressKind {
        match self {
            AnyIp::V4(ip) => ip.kind(),
            AnyIp::V6(ip) => ip.kind(),
        }
    }
}

impl FromStr for AnyIp {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match family_of(s) {
            IpFam::V6 => s.parse().map(AnyIp::V6),
            IpFam::V4 => s.parse().map(AnyIp::V4),
        }
    }
}

impl fmt::Display for AnyIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyIp::V4(ip) => fmt::Display::fmt(ip, f),
            AnyIp::V6(ip) => fmt::Display::fmt(ip, f),
        }
    }
}

impl From<Ipv4Address> for AnyIp {
    fn from(ip: Ipv4Address) -> Self {
        AnyIp::V4(ip)
    }
}

impl From<Ipv6Address> for AnyIp {
    fn from(ip: Ipv6Address) -> Self {
        AnyIp::V6(ip)
    }
}

/* ---------------------------------- */

/// An IPv4 or IPv6 CIDR.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AnyCidr {
    V4(Cidr<Ipv4Address>),
    V6(Cidr<Ipv6Address>),
}

impl AnyCidr {
    pub fn family(&self) -> IpFam {
        match self {
            AnyCidr::V4(_) => IpFam::V4,
            AnyCidr::V6(_) => IpFam::V6,
        }
    }

    /// The stored address, host bits included.
    pub fn address(&self) -> AnyIp {
        match self {
            AnyCidr::V4(cidr) => AnyIp::V4(cidr.address()),
            AnyCidr::V6(cidr) => AnyIp::V6(cidr.address()),
        }
    }

    pub fn prefix_len(&self) -> u8 {
        match self {
            AnyCidr::V4(cidr) => cidr.prefix_len(),
            AnyCidr::V6(cidr) => cidr.prefix_len(),
        }
    }

    pub fn to_network(&self) -> AnyNetwork {
        match self {
            AnyCidr::V4(cidr) => AnyNetwork::V4(cidr.to_network()),
            AnyCidr::V6(cidr) => AnyNetwork::V6(cidr.to_network()),
        }
    }
}

impl Address for AnyCidr {
    fn kind(&self) -> AddressKind {
        match self {
            AnyCidr::V4(cidr) => cidr.kind(),
            AnyCidr::V6(cidr) => cidr.kind(),
        }
    }
}

impl FromStr for AnyCidr {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, _) = s
            .split_once(SLASH)
            .ok_or_else(|| AddressError::invalid(AddressKind::Cidr, s))?;
        match family_of(addr) {
            IpFam::V6 => s.parse().map(AnyCidr::V6),
            IpFam::V4 => s.parse().map(AnyCidr::V4),
        }
    }
}

impl fmt::Display for AnyCidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyCidr::V4(cidr) => fmt::Display::fmt(cidr, f),
            AnyCidr::V6(cidr) => fmt::Display::fmt(cidr, f),
        }
    }
}

impl From<Cidr<Ipv4Address>> for AnyCidr {
    fn from(cidr: Cidr<Ipv4Address>) -> Self {
        AnyCidr::V4(cidr)
    }
}

impl From<Cidr<Ipv6Address>> for AnyCidr {
    fn from(cidr: Cidr<Ipv6Address>) -> Self {
        AnyCidr::V6(cidr)
    }
}

/* ---------------------------------- */

/// An IPv4 or IPv6 network.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AnyNetwork {
    V4(Network<Ipv4Address>),
    V6(Network<Ipv6Address>),
}

impl AnyNetwork {
    pub fn family(&self) -> IpFam {
        match self {
            AnyNetwork::V4(_) => IpFam::V4,
            AnyNetwork::V6(_) => IpFam::V6,
        }
    }

    pub fn to_cidr(&self) -> AnyCidr {
        match self {
            AnyNetwork::V4(net) => AnyCidr::V4(net.to_cidr()),
            AnyNetwork::V6(net) => AnyCidr::V6(net.to_cidr()),
        }
    }

    pub fn range_min(&self) -> AnyCidr {
        match self {
            AnyNetwork::V4(net) => AnyCidr::V4(net.range_min()),
            AnyNetwork::V6(net) => AnyCidr::V6(net.range_min()),
        }
    }

    pub fn range_max(&self) -> AnyCidr {
        match self {
            AnyNetwork::V4(net) => AnyCidr::V4(net.range_max()),
            AnyNetwork::V6(net) => AnyCidr::V6(net.range_max()),
        }
    }

    /// False whenever the address family differs from the network's.
    pub fn contains(&self, addr: &AnyIp) -> bool {
        match (self, addr) {
            (AnyNetwork::V4(net), AnyIp::V4(ip)) => net.contains(ip),
            (AnyNetwork::V6(net), AnyIp::V6(ip)) => net.contains(ip),
            _ => false,
        }
    }
}

impl Address for AnyNetwork {
    fn kind(&self) -> AddressKind {
        match self {
            AnyNetwork::V4(net) => net.kind(),
            AnyNetwork::V6(net) => net.kind(),
        }
    }
}

impl FromStr for AnyNetwork {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<AnyCidr>()?.to_network())
    }
}

impl fmt::Display for AnyNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyNetwork::V4(net) => fmt::Display::fmt(net, f),
            AnyNetwork::V6(net) => fmt::Display::fmt(net, f),
        }
    }
}

impl From<AnyCidr> for AnyNetwork {
    fn from(cidr: AnyCidr) -> Self {
        cidr.to_network()
    }
}

/* -------------------------------------------------------------------------- */

/**
Any value [parse_address] can produce.

Values of different variants never compare equal, even when their numeric
values coincide (`::1` vs `0.0.0.1`, or `::1` vs `::1/128`).
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NetworkAddress {
    Mac(MacAddress),
    Ipv4(Ipv4Address),
    Ipv6(Ipv6Address),
    CidrV4(Cidr<Ipv4Address>),
    CidrV6(Cidr<Ipv6Address>),
}

impl NetworkAddress {
    pub fn as_ip(&self) -> Option<AnyIp> {
        match self {
            NetworkAddress::Ipv4(ip) => Some(AnyIp::V4(*ip)),
            NetworkAddress::Ipv6(ip) => Some(AnyIp::V6(*ip)),
            _ => None,
        }
    }

    pub fn as_mac(&self) -> Option<MacAddress> {
        match self {
            NetworkAddress::Mac(mac) => Some(*mac),
            _ => None,
        }
    }

    pub fn as_cidr(&self) -> Option<AnyCidr> {
        match self {
            NetworkAddress::CidrV4(cidr) => Some(AnyCidr::V4(*cidr)),
            NetworkAddress::CidrV6(cidr) => Some(AnyCidr::V6(*cidr)),
            _ => None,
        }
    }
}

impl Address for NetworkAddress {
    fn kind(&self) -> AddressKind {
        match self {
            NetworkAddress::Mac(mac) => mac.kind(),
            NetworkAddress::Ipv4(ip) => ip.kind(),
            NetworkAddress::Ipv6(ip) => ip.kind(),
            NetworkAddress::CidrV4(cidr) => cidr.kind(),
            NetworkAddress::CidrV6(cidr) => cidr.kind(),
        }
    }
}

impl FromStr for NetworkAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkAddress::Mac(mac) => fmt::Display::fmt(mac, f),
            NetworkAddress::Ipv4(ip) => fmt::Display::fmt(ip, f),
            NetworkAddress::Ipv6(ip) => fmt::Display::fmt(ip, f),
            NetworkAddress::CidrV4(cidr) => fmt::Display::fmt(cidr, f),
            NetworkAddress::CidrV6(cidr) => fmt::Display::fmt(cidr, f),
        }
    }
}

impl From<MacAddress> for NetworkAddress {
    fn from(mac: MacAddress) -> Self {
        NetworkAddress::Mac(mac)
    }
}

impl From<Ipv4Address> for NetworkAddress {
    fn from(ip: Ipv4Address) -> Self {
        NetworkAddress::Ipv4(ip)
    }
}

impl From<Ipv6Address> for NetworkAddress {
    fn from(ip: Ipv6Address) -> Self {
        NetworkAddress::Ipv6(ip)
    }
}

impl From<Cidr<Ipv4Address>> for NetworkAddress {
    fn from(cidr: Cidr<Ipv4Address>) -> Self {
        NetworkAddress::CidrV4(cidr)
    }
}

impl From<Cidr<Ipv6Address>> for NetworkAddress {
    fn from(cidr: Cidr<Ipv6Address>) -> Self {
        NetworkAddress::CidrV6(cidr)
    }
}

impl From<AnyIp> for NetworkAddress {
    fn from(ip: AnyIp) -> Self {
        match ip {
            AnyIp::V4(ip) => NetworkAddress::Ipv4(ip),
            AnyIp::V6(ip) => NetworkAddress::Ipv6(ip),
        }
    }
}

impl From<AnyCidr> for NetworkAddress {
    fn from(cidr: AnyCidr) -> Self {
        match cidr {
            AnyCidr::V4(cidr) => NetworkAddress::CidrV4(cidr),
            AnyCidr::V6(cidr) => NetworkAddress::CidrV6(cidr),
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    const MAC_COLON: &str = "28:e5:65:78:00:22";
    const MAC_DASH: &str = "28-e5-65-78-00-22";
    const MAC_BARE: &str = "28e565780022";

    #[rustfmt::skip]
    #[test]
    fn test_classify() {
        let tests: Vec<(&str, AddressKind, &str)> = vec![
            ("127.0.0.1",         AddressKind::Ipv4,   "127.0.0.1"),
            ("fe80::a65:78:0:22", AddressKind::Ipv6,   "fe80::a65:78:0:22"),
            ("192.168.0.0/24",    AddressKind::CidrV4, "192.168.0.0/24"),
            ("fe80::/64",         AddressKind::CidrV6, "fe80::/64"),
            (MAC_COLON,           AddressKind::Mac,    MAC_COLON),
            (MAC_DASH,            AddressKind::Mac,    MAC_COLON),
            (MAC_BARE,            AddressKind::Mac,    MAC_COLON),
        ];

        for (input, kind, expected) in tests {
            let addr: NetworkAddress = parse_address(input).unwrap();
            assert_eq!(addr.kind(), kind, "Failed: '{input}'");
            assert_eq!(addr.render(), expected, "Failed: '{input}'");
        }
    }

    #[test]
    fn test_classify_unknown() {
        for bad in ["hello world", "", "127.0.0", "fe80::7::22", "28:e5:65:78:00"] {
            let err = parse_address(bad).unwrap_err();
            assert_eq!(err, AddressError::invalid(AddressKind::Any, bad));
            assert_eq!(err.to_string(), format!("invalid network address: '{bad}'"));
        }
        assert!(matches!(
            parse_address("10.0.0.0/f"),
            Err(AddressError::InvalidFormat { kind: AddressKind::CidrV4, .. })
        ));
        assert!(matches!(
            parse_address("10.0.0.0/33"),
            Err(AddressError::OutOfRange { kind: AddressKind::CidrV4, .. })
        ));
    }

    #[test]
    fn test_capability_access() {
        let mac = parse_address(MAC_DASH).unwrap();
        assert_eq!(mac.as_mac().map(|m| m.vendor_id()), Some("28e565".to_string()));
        assert_eq!(mac.as_ip(), None);
        assert_eq!(mac.as_cidr(), None);

        let ip = parse_address("::1").unwrap();
        assert_eq!(ip.as_ip().map(|ip| ip.family()), Some(IpFam::V6));
        assert_eq!(ip.as_mac(), None);

        let cidr = parse_address("10.1.2.3/8").unwrap();
        let cidr: AnyCidr = cidr.as_cidr().unwrap();
        assert_eq!(cidr.family(), IpFam::V4);
        assert_eq!(cidr.prefix_len(), 8);
        assert_eq!(cidr.address().to_string(), "10.1.2.3");
        assert_eq!(cidr.to_network().to_string(), "10.0.0.0/8");
    }

    #[test]
    fn test_cross_kind_inequality() {
        let v4 = NetworkAddress::from("0.0.0.1".parse::<Ipv4Address>().unwrap());
        let v6 = NetworkAddress::from("::1".parse::<Ipv6Address>().unwrap());
        let cidr_v6 = parse_address("::1/128").unwrap();
        let cidr_v4 = parse_address("0.0.0.1/32").unwrap();
        let mac = parse_address("00:00:00:00:00:01").unwrap();

        let all = [v4, v6, cidr_v6, cidr_v4, mac];
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                assert_eq!(a == b, i == j, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_any_ip() {
        let ip: AnyIp = "127.0.0.1".parse().unwrap();
        assert_eq!(ip.family(), IpFam::V4);
        assert_eq!(ip.to_bytes(), vec![127, 0, 0, 1]);
        assert!(!ip.is_null());

        let ip: AnyIp = "::".parse().unwrap();
        assert_eq!(ip.family(), IpFam::V6);
        assert_eq!(ip.to_bytes().len(), 16);
        assert!(ip.is_null());

        assert!("hello world".parse::<AnyIp>().is_err());
    }

    #[test]
    fn test_any_cidr_dispatch() {
        assert_eq!("::1/8".parse::<AnyCidr>().unwrap().family(), IpFam::V6);
        assert_eq!("10.0.0.1/8".parse::<AnyCidr>().unwrap().family(), IpFam::V4);
        assert!(matches!(
            "10.0.0.1".parse::<AnyCidr>(),
            Err(AddressError::InvalidFormat { kind: AddressKind::Cidr, .. })
        ));
    }

    #[test]
    fn test_any_network() {
        let net: AnyNetwork = "200e:cafe:5::15/120".parse().unwrap();
        assert_eq!(net.to_string(), "200e:cafe:5::/120");
        assert_eq!(net.range_min().to_string(), "200e:cafe:5::1/120");
        assert_eq!(net.range_max().to_string(), "200e:cafe:5::ff/120");
        assert!(net.contains(&"200e:cafe:5::15".parse().unwrap()));
        assert!(!net.contains(&"200e:cafe:5::115".parse().unwrap()));
        assert!(!net.contains(&"129.0.0.1".parse().unwrap()));

        let v4: AnyNetwork = "127.0.0.1/8".parse().unwrap();
        assert_ne!(v4, "::1/10".parse::<AnyNetwork>().unwrap());
        assert_eq!(v4.to_cidr(), "127.0.0.0/8".parse().unwrap());
        assert_eq!(v4.kind(), AddressKind::NetworkV4);
        assert_eq!(AnyNetwork::from(v4.to_cidr()), v4);
    }

    #[quickcheck]
    fn prop_dispatch_round_trip_v6(value: u128) -> bool {
        let ip = NetworkAddress::Ipv6(Ipv6Address::from(value));
        parse_address(ip.to_string()) == Ok(ip)
    }

    #[quickcheck]
    fn prop_dispatch_round_trip_mac(value: u64) -> bool {
        let mac = NetworkAddress::Mac(MacAddress::try_from(value >> 16).unwrap());
        parse_address(mac.to_string()) == Ok(mac)
    }
}
