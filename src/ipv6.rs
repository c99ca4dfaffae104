// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cidr::IpAddress, strings::*, Address, AddressError, AddressKind, IPV6_BITS};
use std::{fmt, net::Ipv6Addr, str::FromStr};

const IPV6_BYTES: usize = 16;

/// 128-bit IPv6 address.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Ipv6Address(u128);

impl Ipv6Address {
    /// `::`
    pub const UNSPECIFIED: Self = Self(0);

    /**
    Big-endian decode of up to 16 bytes.

    Shorter input is the least significant part of the address, so
    `[0x01]` is `::1`. More than 16 bytes fails with [AddressError::OutOfRange].
    */
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() > IPV6_BYTES {
            return Err(AddressError::out_of_range(
                AddressKind::Ipv6,
                bytes.len() as i128,
                IPV6_BYTES as i128,
            ));
        }
        let mut buf: [u8; IPV6_BYTES] = [0; IPV6_BYTES];
        buf[IPV6_BYTES - bytes.len()..].copy_from_slice(bytes);
        Ok(Self(u128::from_be_bytes(buf)))
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn to_number(self) -> u128 {
        self.0
    }

    /// True for `::`.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl IpAddress for Ipv6Address {
    const BITS: u8 = IPV6_BITS;
    const RESERVES_BROADCAST: bool = false;
    const KIND: AddressKind = AddressKind::Ipv6;
    const CIDR_KIND: AddressKind = AddressKind::CidrV6;
    const NETWORK_KIND: AddressKind = AddressKind::NetworkV6;

    #[inline]
    fn to_bits(self) -> u128 {
        self.0
    }

    #[inline]
    fn from_bits(bits: u128) -> Self {
        Self(bits)
    }
}

impl Address for Ipv6Address {
    fn kind(&self) -> AddressKind {
        <Self as IpAddress>::KIND
    }
}

impl FromStr for Ipv6Address {
    type Err = AddressError;

    /// Accepts any textual form the standard library does (`::` compression,
    /// embedded dotted quad) but no scope/zone suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == IPV6_NULL {
            return Ok(Self::UNSPECIFIED);
        }
        if !s.contains(COLON) {
            return Err(AddressError::invalid(AddressKind::Ipv6, s));
        }
        let addr: Ipv6Addr = s
            .parse()
            .map_err(|_| AddressError::invalid(AddressKind::Ipv6, s))?;
        Ok(Self::from(addr))
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(IPV6_NULL);
        }
        // std renders the RFC 5952 compressed form
        fmt::Display::fmt(&Ipv6Addr::from(self.0), f)
    }
}

impl From<u128> for Ipv6Address {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Ipv6Address> for u128 {
    fn from(addr: Ipv6Address) -> Self {
        addr.0
    }
}

impl From<[u8; 16]> for Ipv6Address {
    fn from(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self(u128::from(addr))
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
        Ipv6Addr::from(addr.0)
    }
}

/* -------------------------------------------------------------------------- */
