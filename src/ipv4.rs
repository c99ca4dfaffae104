// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cidr::IpAddress, Address, AddressError, AddressKind, IPV4_BITS};
use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt, net::Ipv4Addr, str::FromStr};

lazy_static! {
    // Four decimal octets, no leading zeros, no abbreviated or hex/octal forms.
    static ref DOTTED_QUAD: Regex = Regex::new(
        r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$"
    )
    .expect("dotted quad regex");
}

/// 32-bit IPv4 address.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    /// `0.0.0.0`
    pub const UNSPECIFIED: Self = Self(0);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self(u32::from_be_bytes([a, b, c, d]))
    }

    /// Big-endian decode. Every 32-bit value is a valid address.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn to_int(self) -> u32 {
        self.0
    }

    /// True for `0.0.0.0`.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl IpAddress for Ipv4Address {
    const BITS: u8 = IPV4_BITS;
    const RESERVES_BROADCAST: bool = true;
    const KIND: AddressKind = AddressKind::Ipv4;
    const CIDR_KIND: AddressKind = AddressKind::CidrV4;
    const NETWORK_KIND: AddressKind = AddressKind::NetworkV4;

    #[inline]
    fn to_bits(self) -> u128 {
        self.0 as u128
    }

    #[inline]
    fn from_bits(bits: u128) -> Self {
        Self(bits as u32)
    }
}

impl Address for Ipv4Address {
    fn kind(&self) -> AddressKind {
        <Self as IpAddress>::KIND
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DOTTED_QUAD
            .captures(s)
            .ok_or_else(|| AddressError::invalid(AddressKind::Ipv4, s))?;

        let mut octets: [u8; 4] = [0; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            // the regex already bounds each capture to 0..=255
            *octet = caps[i + 1]
                .parse::<u8>()
                .map_err(|_| AddressError::invalid(AddressKind::Ipv4, s))?;
        }
        Ok(Self::from_bytes(octets))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.to_bytes();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> Self {
        addr.0
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self(u32::from(addr))
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    const VALID: [&str; 5] = ["0.0.0.0", "255.255.255.255", "127.0.0.1", "10.0.5.153", "86.134.56.253"];

    #[rustfmt::skip]
    const INVALID: [&str; 15] = [
        "a.7.s.s", "localhost", "127.0.0", "10.0.5.256", "10.0.256.2", "10.256.0.2",
        "256.0.0.2", "10.896.0.2", "86.134.56.263", "", "127001",
        "0x7f.0.0.1", "010.0.0.1", "127.1", " 127.0.0.1",
    ];

    #[test]
    fn test_parse_valid() {
        for s in VALID {
            let ip: Ipv4Address = s.parse().unwrap();
            assert_eq!(ip.to_string(), s, "Failed: '{s}'");
        }
    }

    #[test]
    fn test_parse_invalid() {
        for s in INVALID {
            let err = s.parse::<Ipv4Address>().unwrap_err();
            assert!(
                matches!(err, AddressError::InvalidFormat { kind: AddressKind::Ipv4, .. }),
                "Failed: '{s}'"
            );
        }
    }

    #[test]
    fn test_to_int() {
        let ip: Ipv4Address = "127.0.0.1".parse().unwrap();
        assert_eq!(ip.to_int(), 0x7f000001);
        assert_eq!(Ipv4Address::from(0x7f000001).to_string(), "127.0.0.1");
    }

    #[test]
    fn test_bytes() {
        let ip: Ipv4Address = "255.0.0.5".parse().unwrap();
        let bytes: [u8; 4] = ip.to_bytes();
        assert_eq!(bytes, [255, 0, 0, 5]);
        assert_eq!(Ipv4Address::from_bytes(bytes).to_string(), "255.0.0.5");
    }

    #[test]
    fn test_is_null() {
        assert!("0.0.0.0".parse::<Ipv4Address>().unwrap().is_null());
        assert!(!"127.0.0.1".parse::<Ipv4Address>().unwrap().is_null());
    }

    #[test]
    fn test_equality() {
        let a: Ipv4Address = "192.168.55.7".parse().unwrap();
        let b: Ipv4Address = "192.168.55.7".parse().unwrap();
        let c: Ipv4Address = "192.168.55.8".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_std_conversions() {
        let std_ip = Ipv4Addr::new(10, 1, 2, 3);
        let ip = Ipv4Address::from(std_ip);
        assert_eq!(ip, Ipv4Address::new(10, 1, 2, 3));
        assert_eq!(Ipv4Addr::from(ip), std_ip);
    }

    #[quickcheck]
    fn prop_text_round_trip(value: u32) -> bool {
        let ip = Ipv4Address::from(value);
        ip.to_string().parse::<Ipv4Address>() == Ok(ip)
    }

    #[quickcheck]
    fn prop_display_matches_std(value: u32) -> bool {
        Ipv4Address::from(value).to_string() == Ipv4Addr::from(value).to_string()
    }
}
