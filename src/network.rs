// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cidr::{all_ones, mask_u128, Cidr, IpAddress},
    Address, AddressError, AddressKind, Ipv4Address,
};
use std::{fmt, str::FromStr};

/**
A network: a [Cidr] with its host bits cleared.

`88.154.76.23/24` becomes `88.154.76.0/24`. Two networks are equal when
their normalized CIDRs are equal.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Network<A> {
    netmask: A,
    /// normalized: `cidr.address() & netmask == cidr.address()`
    cidr: Cidr<A>,
}

impl<A: IpAddress> Network<A> {
    pub fn new(cidr: Cidr<A>) -> Self {
        let prefix: u8 = cidr.prefix_len();
        let mask: u128 = mask_u128(A::BITS, prefix);
        let base: A = A::from_bits(cidr.address().to_bits() & mask);

        Self {
            netmask: A::from_bits(mask),
            cidr: Cidr::new_unchecked(base, prefix),
        }
    }

    #[inline]
    pub fn netmask(&self) -> A {
        self.netmask
    }

    /// The normalized CIDR, e.g. `88.154.76.0/24`.
    #[inline]
    pub fn to_cidr(&self) -> Cidr<A> {
        self.cidr
    }

    /// Lowest address of the network (all host bits zero).
    #[inline]
    pub fn network_address(&self) -> A {
        self.cidr.address()
    }

    #[inline]
    pub fn prefix_len(&self) -> u8 {
        self.cidr.prefix_len()
    }

    /**
    First usable address.

    For /31 and /32 (/127 and /128 in IPv6) this is the network address
    itself, otherwise the address right after it.
    */
    pub fn range_min(&self) -> Cidr<A> {
        if self.prefix_len() >= A::BITS - 1 {
            return self.cidr;
        }
        self.with_host(self.base() + 1)
    }

    /**
    Last usable address.

    - /32 (/128): the network address
    - /31 (/127): same as [Network::range_min]
    - otherwise the all-ones host address; for IPv4, which reserves that
      one as broadcast, the address just below it
    */
    pub fn range_max(&self) -> Cidr<A> {
        let prefix: u8 = self.prefix_len();
        if prefix == A::BITS {
            return self.cidr;
        }
        if prefix == A::BITS - 1 {
            return self.range_min();
        }

        let mut host: u128 = self.host_mask();
        if A::RESERVES_BROADCAST {
            host &= !1;
        }
        self.with_host(self.base() | host)
    }

    /// True if `addr` lies within this network.
    pub fn contains(&self, addr: &A) -> bool {
        addr.to_bits() & self.netmask.to_bits() == self.base()
    }

    /// Number of addresses in the network. Saturating, see [Cidr::len].
    pub fn len(&self) -> u128 {
        self.cidr.len()
    }

    /**
    Returns an iterator over every address in the network, network and
    all-ones addresses included.

    NOTE: a short prefix yields a very large number of addresses,
    especially for IPv6.
    */
    pub fn iter(&self) -> NetworkIter<A> {
        NetworkIter {
            current: self.base(),
            end: self.base() | self.host_mask(),
            done: false,
            _addr: std::marker::PhantomData,
        }
    }

    #[inline]
    fn base(&self) -> u128 {
        self.cidr.address().to_bits()
    }

    #[inline]
    fn host_mask(&self) -> u128 {
        all_ones(A::BITS) & !self.netmask.to_bits()
    }

    #[inline]
    fn with_host(&self, bits: u128) -> Cidr<A> {
        Cidr::new_unchecked(A::from_bits(bits), self.prefix_len())
    }
}

impl Network<Ipv4Address> {
    /**
    Broadcast address: all host bits set, at every prefix length.

    Unlike [Network::range_max] there is no special case for /31 and /32.
    */
    pub fn broadcast(&self) -> Cidr<Ipv4Address> {
        self.with_host(self.base() | self.host_mask())
    }
}

impl<A: IpAddress> From<Cidr<A>> for Network<A> {
    fn from(cidr: Cidr<A>) -> Self {
        Self::new(cidr)
    }
}

impl<A: IpAddress> IntoIterator for Network<A> {
    type Item = A;
    type IntoIter = NetworkIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: IpAddress> Address for Network<A> {
    fn kind(&self) -> AddressKind {
        A::NETWORK_KIND
    }
}

impl<A: IpAddress> fmt::Display for Network<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cidr, f)
    }
}

impl<A: IpAddress> FromStr for Network<A> {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.parse::<Cidr<A>>()?))
    }
}

/* ---------------------------------- */

/// Iterator over all addresses of a [Network].
pub struct NetworkIter<A> {
    current: u128,
    /// inclusive
    end: u128,
    done: bool,
    _addr: std::marker::PhantomData<A>,
}

impl<A: IpAddress> Iterator for NetworkIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let addr: A = A::from_bits(self.current);
        if self.current == self.end {
            self.done = true;
        } else {
            self.current += 1;
        }

        Some(addr)
    }
}

/* -------------------------------------------------------------------------- */
