// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Every address value serializes as its canonical string and deserializes
//! through its `FromStr` impl.

use crate::{
    strings::*, AddressError, AnyCidr, AnyIp, AnyNetwork, Cidr, IpAddress, Ipv4Address, Ipv6Address,
    MacAddress, Network, NetworkAddress,
};
use serde::{de, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, marker::PhantomData, str::FromStr};

struct FromStrVisitor<T> {
    expecting: &'static str,
    _marker: PhantomData<T>,
}

impl<T> FromStrVisitor<T> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for FromStrVisitor<T>
where
    T: FromStr<Err = AddressError>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<T>().map_err(|e| E::custom(e.to_string()))
    }
}

macro_rules! impl_serde_via_str {
    ($($ty:ty => $expecting:expr),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.to_string())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_str(FromStrVisitor::<$ty>::new($expecting))
                }
            }
        )+
    };
}

impl_serde_via_str! {
    Ipv4Address => EXPECT_IPV4,
    Ipv6Address => EXPECT_IPV6,
    MacAddress => EXPECT_MAC,
    AnyIp => EXPECT_IP,
    AnyCidr => EXPECT_CIDR,
    AnyNetwork => EXPECT_NETWORK,
    NetworkAddress => EXPECT_ANY,
}

impl<A: IpAddress> Serialize for Cidr<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, A: IpAddress> Deserialize<'de> for Cidr<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(FromStrVisitor::<Self>::new(EXPECT_CIDR))
    }
}

impl<A: IpAddress> Serialize for Network<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, A: IpAddress> Deserialize<'de> for Network<A> {
    /// Host bits in the input are cleared, as with `parse()`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(FromStrVisitor::<Self>::new(EXPECT_NETWORK))
    }
}

/* -------------------------------------------------------------------------- */
