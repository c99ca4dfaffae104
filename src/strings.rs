// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static COLON: &str = ":";
pub(crate) static SLASH: &str = "/";
pub(crate) static IPV6_NULL: &str = "::";

// lib.rs
pub(crate) static ERR_INVALID: &str = "invalid";
pub(crate) static ERR_OUT_OF_RANGE: &str = "value out of range for";

pub(crate) static KIND_IPV4: &str = "IPv4 address";
pub(crate) static KIND_IPV6: &str = "IPv6 address";
pub(crate) static KIND_MAC: &str = "MAC address";
pub(crate) static KIND_MAC_PREFIX: &str = "MAC address prefix";
pub(crate) static KIND_CIDR_V4: &str = "IPv4 CIDR";
pub(crate) static KIND_CIDR_V6: &str = "IPv6 CIDR";
pub(crate) static KIND_CIDR: &str = "CIDR";
pub(crate) static KIND_NET_V4: &str = "IPv4 network";
pub(crate) static KIND_NET_V6: &str = "IPv6 network";
pub(crate) static KIND_ANY: &str = "network address";

// serialization.rs
pub(crate) static EXPECT_IPV4: &str = "an IPv4 address, like 192.168.2.1";
pub(crate) static EXPECT_IPV6: &str = "an IPv6 address, like fe80::1";
pub(crate) static EXPECT_MAC: &str = "a MAC address, like 02:00:5e:10:00:01";
pub(crate) static EXPECT_CIDR: &str = "a CIDR address, like 192.168.2.1/24";
pub(crate) static EXPECT_NETWORK: &str = "a network, like 192.168.2.0/24";
pub(crate) static EXPECT_IP: &str = "an IPv4 or IPv6 address";
pub(crate) static EXPECT_ANY: &str = "a MAC address, IP address, or CIDR";
