// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Address, AddressError, AddressKind, MAC_BITS};
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use std::{fmt, str::FromStr};
use tracing::trace;

const MAC_BYTES: usize = 6;
const MAC_MAX: u64 = (1 << MAC_BITS) - 1;
/// Locally administered bit: second least significant bit of the first octet.
const LOCAL_BIT: u64 = 1 << 41;

lazy_static! {
    // 6 hex octets, delimited uniformly by ':' or '-', or not at all.
    pub(crate) static ref MAC_FORMAT: Regex = Regex::new(
        r"(?i)^[0-9a-f]{2}(?:(?::[0-9a-f]{2}){5}|(?:-[0-9a-f]{2}){5}|(?:[0-9a-f]{2}){5})$"
    )
    .expect("MAC address regex");
    static ref MAC_PREFIX_FORMAT: Regex = Regex::new(r"(?i)^(?:[0-9a-f]{2}){0,3}$").expect("MAC prefix regex");
}

/// 48-bit MAC address.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct MacAddress(u64);

impl MacAddress {
    /// `ff:ff:ff:ff:ff:ff`
    pub const BROADCAST: Self = Self(MAC_MAX);

    /**
    Big-endian decode of up to 6 bytes, shorter input left padded with zeros.
    More than 6 bytes fails with [AddressError::OutOfRange].
    */
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() > MAC_BYTES {
            return Err(AddressError::out_of_range(
                AddressKind::Mac,
                bytes.len() as i128,
                MAC_BYTES as i128,
            ));
        }
        Ok(Self(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)))
    }

    pub const fn to_bytes(self) -> [u8; 6] {
        let b: [u8; 8] = self.0.to_be_bytes();
        [b[2], b[3], b[4], b[5], b[6], b[7]]
    }

    #[inline]
    pub const fn to_number(self) -> u64 {
        self.0
    }

    /// Top 3 octets as 6 lowercase hex digits, e.g. `dc0ea1`.
    pub fn vendor_id(&self) -> String {
        format!("{:06x}", self.0 >> 24)
    }

    /// Locally administered (not burned in by a vendor).
    #[inline]
    pub const fn is_local(self) -> bool {
        self.0 & LOCAL_BIT != 0
    }

    #[inline]
    pub const fn is_broadcast(self) -> bool {
        self.0 == MAC_MAX
    }

    /**
    Generate a random, locally administered MAC address.

    Randomness comes from [rand::rng], a cryptographically secure
    generator seeded from the OS.
    */
    pub fn generate_random() -> Self {
        let mut bytes: [u8; MAC_BYTES] = [0; MAC_BYTES];
        rand::rng().fill(&mut bytes[..]);

        let mac: Self = Self(Self::from_array(bytes).0 | LOCAL_BIT);
        trace!(%mac, "generated random local MAC address");
        mac
    }

    /**
    Generate a random MAC address starting with `prefix`.

    `prefix` is 0 to 3 octets written as hex digits (`""`, `"02"`,
    `"dc0ea1"`). The remaining octets are random. The locally administered
    bit is left as the prefix has it; an empty prefix behaves like
    [MacAddress::generate_random].
    */
    pub fn generate_random_with_prefix(prefix: &str) -> Result<Self, AddressError> {
        if prefix.is_empty() {
            return Ok(Self::generate_random());
        }
        if !MAC_PREFIX_FORMAT.is_match(prefix) {
            return Err(AddressError::invalid(AddressKind::MacPrefix, prefix));
        }

        let fixed: usize = prefix.len() / 2;
        let mut bytes: [u8; MAC_BYTES] = [0; MAC_BYTES];
        for (i, byte) in bytes.iter_mut().take(fixed).enumerate() {
            *byte = u8::from_str_radix(&prefix[2 * i..2 * i + 2], 16)
                .map_err(|_| AddressError::invalid(AddressKind::MacPrefix, prefix))?;
        }
        rand::rng().fill(&mut bytes[fixed..]);

        let mac: Self = Self::from_array(bytes);
        trace!(%mac, prefix, "generated random MAC address");
        Ok(mac)
    }

    #[inline]
    fn from_array(bytes: [u8; MAC_BYTES]) -> Self {
        let [a, b, c, d, e, f] = bytes;
        Self(u64::from_be_bytes([0, 0, a, b, c, d, e, f]))
    }
}

impl Address for MacAddress {
    fn kind(&self) -> AddressKind {
        AddressKind::Mac
    }
}

impl FromStr for MacAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !MAC_FORMAT.is_match(s) {
            return Err(AddressError::invalid(AddressKind::Mac, s));
        }
        let hex: String = s.chars().filter(|c| c.is_ascii_hexdigit()).collect();
        let value: u64 = u64::from_str_radix(&hex, 16).map_err(|_| AddressError::invalid(AddressKind::Mac, s))?;
        Ok(Self(value))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.to_bytes();
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        Self::from_array(bytes)
    }
}

impl TryFrom<u64> for MacAddress {
    type Error = AddressError;

    /// Fails if `value` needs more than 48 bits.
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > MAC_MAX {
            return Err(AddressError::out_of_range(AddressKind::Mac, value as i128, MAC_MAX as i128));
        }
        Ok(Self(value))
    }
}

impl From<MacAddress> for u64 {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

/* -------------------------------------------------------------------------- */
