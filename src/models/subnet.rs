//! The [`Subnet`] value type and its CIDR arithmetic.
//!
//! A `Subnet` is an immutable `(network address, prefix length)` pair
//! built once from CIDR text. The subnet mask is always derived from
//! the prefix length, never stored, and the stored address is
//! canonicalized to the network address on construction.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::bytes;
use crate::error::{ParseError, TypeMismatchError};

/// Maximum prefix length for an IPv4 subnet (32 bits).
pub const MAX_PREFIX_V4: u8 = 32;
/// Maximum prefix length for an IPv6 subnet (128 bits).
pub const MAX_PREFIX_V6: u8 = 128;

/// Address family of a subnet or address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// 32-bit IPv4.
    V4,
    /// 128-bit IPv6.
    V6,
}

impl Family {
    /// Family of a parsed address.
    pub fn of(addr: IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Address width in bits (32 or 128).
    pub fn bit_width(self) -> u8 {
        match self {
            Family::V4 => MAX_PREFIX_V4,
            Family::V6 => MAX_PREFIX_V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Total address count of a subnet.
///
/// Every count fits `u128` except an IPv6 `/0`, whose `2^128` is one
/// past `u128::MAX` and is carried symbolically so nothing truncates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCount {
    /// An exact count.
    Exact(u128),
    /// `2^128` addresses (IPv6 `/0`).
    Pow2_128,
}

/// `2^128` in decimal, for display of [`HostCount::Pow2_128`].
const POW2_128_DECIMAL: &str = "340282366920938463463374607431768211456";

impl fmt::Display for HostCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HostCount::Exact(n) => write!(f, "{}", n),
            HostCount::Pow2_128 => write!(f, "{}", POW2_128_DECIMAL),
        }
    }
}

impl Serialize for HostCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// An IPv4 or IPv6 subnet in CIDR notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    /// Network address, host bits already zeroed.
    addr: IpAddr,
    /// Prefix length (0..=32 or 0..=128 per family).
    prefix: u8,
    /// The CIDR text the subnet was parsed from, kept for display.
    literal: String,
}

impl Subnet {
    /// Parse CIDR text like `"192.168.1.0/24"` or `"2001:db8::/32"`.
    ///
    /// Any host address is accepted; the stored address is masked down
    /// to the network address. Surrounding whitespace is ignored.
    pub fn parse(cidr_text: &str) -> Result<Subnet, ParseError> {
        let literal = cidr_text.trim();
        let Some((addr_text, prefix_text)) = literal.split_once('/') else {
            return Err(ParseError::InvalidPrefix(literal.to_string()));
        };
        let addr: IpAddr = addr_text
            .parse()
            .map_err(|_| ParseError::InvalidAddress(literal.to_string()))?;
        let prefix: u8 = prefix_text
            .parse()
            .map_err(|_| ParseError::InvalidPrefix(literal.to_string()))?;
        if prefix > Family::of(addr).bit_width() {
            return Err(ParseError::InvalidPrefix(literal.to_string()));
        }
        Ok(Subnet {
            addr: mask_to_network(addr, prefix),
            prefix,
            literal: literal.to_string(),
        })
    }

    /// The CIDR text this subnet was parsed from.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Address family.
    pub fn family(&self) -> Family {
        Family::of(self.addr)
    }

    /// Prefix length in bits.
    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// Canonical network address (host bits zero).
    pub fn network_address(&self) -> IpAddr {
        self.addr
    }

    /// The subnet mask rendered as an address of the same family,
    /// dotted quad for IPv4 and colon-hex for IPv6.
    pub fn mask(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(_) => {
                let mut mask = [0u8; 4];
                bytes::fill_prefix_mask(self.prefix, &mut mask);
                IpAddr::V4(Ipv4Addr::from(mask))
            }
            IpAddr::V6(_) => {
                let mut mask = [0u8; 16];
                bytes::fill_prefix_mask(self.prefix, &mut mask);
                IpAddr::V6(Ipv6Addr::from(mask))
            }
        }
    }

    /// Network address with all host bits set.
    ///
    /// IPv6 has no broadcast concept; the value still marks the end of
    /// the address range.
    pub fn broadcast_address(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(v4) => {
                let mut octets = v4.octets();
                let mut mask = [0u8; 4];
                bytes::fill_prefix_mask(self.prefix, &mut mask);
                bytes::set_host_bits(&mut octets, &mask);
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            IpAddr::V6(v6) => {
                let mut octets = v6.octets();
                let mut mask = [0u8; 16];
                bytes::fill_prefix_mask(self.prefix, &mut mask);
                bytes::set_host_bits(&mut octets, &mask);
                IpAddr::V6(Ipv6Addr::from(octets))
            }
        }
    }

    /// First usable host address.
    ///
    /// IPv4: network + 1. IPv6: the network address itself, since no
    /// address is reserved. For `/31` and `/32` the value is computed
    /// mechanically; check [`usable_hosts`](Subnet::usable_hosts)
    /// before treating it as a real host.
    pub fn first_usable(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(v4) => {
                let mut octets = v4.octets();
                bytes::increment(&mut octets);
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            IpAddr::V6(_) => self.addr,
        }
    }

    /// Last usable host address.
    ///
    /// IPv4: broadcast − 1. IPv6: the range end itself.
    pub fn last_usable(&self) -> IpAddr {
        match self.broadcast_address() {
            IpAddr::V4(v4) => {
                let mut octets = v4.octets();
                bytes::decrement(&mut octets);
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            end @ IpAddr::V6(_) => end,
        }
    }

    /// Total address count: `2^(width - prefix)`.
    pub fn total_hosts(&self) -> HostCount {
        let host_bits = self.family().bit_width() - self.prefix;
        if u32::from(host_bits) >= u128::BITS {
            HostCount::Pow2_128
        } else {
            HostCount::Exact(1u128 << host_bits)
        }
    }

    /// Usable host count: total minus the network/broadcast pair,
    /// clamped to zero when the block holds two addresses or fewer.
    pub fn usable_hosts(&self) -> u128 {
        match self.total_hosts() {
            HostCount::Pow2_128 => u128::MAX - 1, // 2^128 - 2
            HostCount::Exact(n) if n > 2 => n - 2,
            HostCount::Exact(_) => 0,
        }
    }

    /// Whether `ip` falls inside this subnet.
    ///
    /// Network and broadcast addresses count as members.
    pub fn contains(&self, ip: IpAddr) -> Result<bool, TypeMismatchError> {
        if Family::of(ip) != self.family() {
            return Err(TypeMismatchError {
                address_family: Family::of(ip),
                subnet_family: self.family(),
            });
        }
        Ok(mask_to_network(ip, self.prefix) == self.addr)
    }
}

/// Zero the host bits of `addr` for the given prefix length.
fn mask_to_network(addr: IpAddr, prefix: u8) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => {
            let mut octets = v4.octets();
            let mut mask = [0u8; 4];
            bytes::fill_prefix_mask(prefix, &mut mask);
            bytes::apply_mask(&mut octets, &mask);
            IpAddr::V4(Ipv4Addr::from(octets))
        }
        IpAddr::V6(v6) => {
            let mut octets = v6.octets();
            let mut mask = [0u8; 16];
            bytes::fill_prefix_mask(prefix, &mut mask);
            bytes::apply_mask(&mut octets, &mask);
            IpAddr::V6(Ipv6Addr::from(octets))
        }
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::parse(&s).map_err(de::Error::custom)
    }
}
