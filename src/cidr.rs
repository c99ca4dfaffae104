// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{network::Network, strings::*, Address, AddressError, AddressKind, IPV6_BITS};
use std::{fmt, hash::Hash, str::FromStr};

/**
An IP address of a fixed bit width.

[Cidr] and [Network] are generic over this trait, so the mask and range
arithmetic is written once and shared by IPv4 and IPv6. All arithmetic is
done on `u128`; narrower addresses only ever see their low `BITS` bits.
*/
pub trait IpAddress:
    Copy + fmt::Debug + fmt::Display + FromStr<Err = AddressError> + Eq + Hash + Ord + Address
{
    /// Width of the address in bits.
    const BITS: u8;
    /// The all-ones host address is the broadcast address and is not part
    /// of the usable host range.
    const RESERVES_BROADCAST: bool;
    const KIND: AddressKind;
    const CIDR_KIND: AddressKind;
    const NETWORK_KIND: AddressKind;

    fn to_bits(self) -> u128;

    /// Truncates `bits` to the address width.
    fn from_bits(bits: u128) -> Self;
}

/**
Returns a u128 with prefix high bits (of a `bits` wide value) set,
remaining low bits zero.

bits: 32 or 128, prefix: `0..=bits`
*/
#[inline]
pub(crate) fn mask_u128(bits: u8, prefix: u8) -> u128 {
    if prefix == 0 {
        return 0;
    }
    if prefix >= bits {
        return all_ones(bits);
    }
    let low: u8 = bits - prefix;
    all_ones(bits) & !((1u128 << low) - 1)
}

/// All `bits` low bits set.
#[inline]
pub(crate) fn all_ones(bits: u8) -> u128 {
    if bits >= IPV6_BITS {
        !0u128
    } else {
        (1u128 << bits) - 1
    }
}

/**
Parse the prefix half of a CIDR string.

Accepts an optionally signed run of decimal digits and nothing else, then
bounds-checks it against `0..=bits`.
*/
pub(crate) fn parse_prefix(text: &str, bits: u8, kind: AddressKind) -> Result<u8, AddressError> {
    let digits: &str = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::invalid(kind, text));
    }

    let value: i128 = match text.parse::<i128>() {
        Ok(v) => v,
        // only digits remain, so the only failure is overflow
        Err(_) if text.starts_with('-') => i128::MIN,
        Err(_) => i128::MAX,
    };

    if !(0..=bits as i128).contains(&value) {
        return Err(AddressError::out_of_range(kind, value, bits as i128));
    }
    Ok(value as u8)
}

/* -------------------------------------------------------------------------- */

/**
An address paired with a prefix length.

Host bits are kept as given: `10.1.2.3/8` stays `10.1.2.3/8`. Use
[Cidr::to_network] for the normalized network.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cidr<A> {
    addr: A,
    /// `0..=A::BITS`
    prefix: u8,
}

impl<A: IpAddress> Cidr<A> {
    /// Fails with [AddressError::OutOfRange] if `prefix` is wider than the address.
    pub fn new(addr: A, prefix: u8) -> Result<Self, AddressError> {
        if prefix > A::BITS {
            return Err(AddressError::out_of_range(A::CIDR_KIND, prefix as i128, A::BITS as i128));
        }
        Ok(Self { addr, prefix })
    }

    /// `prefix` must already be within `0..=A::BITS`.
    #[inline]
    pub(crate) fn new_unchecked(addr: A, prefix: u8) -> Self {
        debug_assert!(prefix <= A::BITS);
        Self { addr, prefix }
    }

    /// Host route (/32 or /128) for a single address.
    pub fn host(addr: A) -> Self {
        Self { addr, prefix: A::BITS }
    }

    /// The stored address, host bits included.
    #[inline]
    pub fn address(&self) -> A {
        self.addr
    }

    #[inline]
    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// Address with the top `prefix_len` bits set.
    pub fn netmask(&self) -> A {
        A::from_bits(mask_u128(A::BITS, self.prefix))
    }

    pub fn to_network(&self) -> Network<A> {
        Network::new(*self)
    }

    /// Returns true if the CIDR represents a single host address.
    pub fn is_host(&self) -> bool {
        self.prefix == A::BITS
    }

    /// Number of addresses covered. Cannot be an [usize] due to IPv6. Saturating.
    pub fn len(&self) -> u128 {
        let host_bits: u8 = A::BITS - self.prefix;

        // 2^128 does not fit in u128
        if host_bits == IPV6_BITS {
            return u128::MAX;
        }
        1u128 << host_bits
    }
}

impl<A: IpAddress> Address for Cidr<A> {
    fn kind(&self) -> AddressKind {
        A::CIDR_KIND
    }
}

impl<A: IpAddress> fmt::Display for Cidr<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", self.addr, self.prefix)
    }
}

impl<A: IpAddress> FromStr for Cidr<A> {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s
            .split_once(SLASH)
            .ok_or_else(|| AddressError::invalid(A::CIDR_KIND, s))?;
        if prefix.contains(SLASH) {
            return Err(AddressError::invalid(A::CIDR_KIND, s));
        }

        // malformed prefix is reported before a bad address, a too wide one after
        let prefix: Result<u8, AddressError> = parse_prefix(prefix, A::BITS, A::CIDR_KIND);
        if let Err(err @ AddressError::InvalidFormat { .. }) = prefix {
            return Err(err);
        }
        let addr: A = addr.parse()?;
        let prefix: u8 = prefix?;

        Ok(Self { addr, prefix })
    }
}

/* -------------------------------------------------------------------------- */
