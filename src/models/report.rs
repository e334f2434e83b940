//! Plain data records handed to the renderers.
//!
//! The engine produces these; how they end up on screen (colored text,
//! JSON) is entirely the output layer's business.

use serde::Serialize;
use std::net::IpAddr;

use super::{HostCount, Subnet};

/// Everything the display mode reports about one subnet.
#[derive(Debug, Clone, Serialize)]
pub struct SubnetReport {
    /// The CIDR text as the user wrote it.
    pub cidr: String,
    /// Canonical network address.
    pub network_address: IpAddr,
    /// Subnet mask in dotted (IPv4) or colon-hex (IPv6) form.
    pub subnet_mask: IpAddr,
    /// Range end; a true broadcast address only for IPv4.
    pub broadcast_address: IpAddr,
    /// First usable host address (raw value, see `usable_hosts`).
    pub first_usable: IpAddr,
    /// Last usable host address (raw value, see `usable_hosts`).
    pub last_usable: IpAddr,
    /// Total address count.
    pub total_hosts: HostCount,
    /// Usable host count after the network/broadcast clamp.
    // Serialized as a string: IPv6 counts overflow JSON numbers.
    #[serde(serialize_with = "u128_as_string")]
    pub usable_hosts: u128,
}

fn u128_as_string<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

impl SubnetReport {
    /// Collect the derived properties of `subnet` into one record.
    pub fn new(subnet: &Subnet) -> SubnetReport {
        SubnetReport {
            cidr: subnet.literal().to_string(),
            network_address: subnet.network_address(),
            subnet_mask: subnet.mask(),
            broadcast_address: subnet.broadcast_address(),
            first_usable: subnet.first_usable(),
            last_usable: subnet.last_usable(),
            total_hosts: subnet.total_hosts(),
            usable_hosts: subnet.usable_hosts(),
        }
    }
}
