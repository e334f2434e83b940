//! Domain models for CIDR arithmetic.
//!
//! This module contains the core value types:
//! - [`bytes`] - fixed-width byte-array arithmetic shared across families
//! - [`Subnet`] - an immutable CIDR block with derived properties
//! - [`SubnetReport`] - the plain record handed to renderers

pub mod bytes;
mod report;
mod subnet;

// Re-export public types
pub use report::SubnetReport;
pub use subnet::{Family, HostCount, Subnet, MAX_PREFIX_V4, MAX_PREFIX_V6};
