//! Typed errors for CIDR parsing and membership checks.
//!
//! All engine failures are local and recoverable; the caller decides
//! whether a bad entry aborts the run or is skipped.

use crate::models::Family;

/// A malformed CIDR literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The address portion is not a valid IPv4 or IPv6 literal.
    #[error("invalid CIDR notation '{0}': bad address literal")]
    InvalidAddress(String),
    /// The prefix length is missing, non-numeric, or out of range for
    /// the detected family.
    #[error("invalid CIDR notation '{0}': bad or missing prefix length")]
    InvalidPrefix(String),
}

/// A malformed plain address literal (check target).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IP address: {0}")]
pub struct InvalidAddressError(pub String);

/// Address-family mismatch between a subnet and a queried address.
///
/// An IPv4 subnet can never contain an IPv6 address and vice versa;
/// there is no implicit mapped-address coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("address family mismatch: address is {address_family}, subnet is {subnet_family}")]
pub struct TypeMismatchError {
    /// Family of the queried address.
    pub address_family: Family,
    /// Family of the subnet.
    pub subnet_family: Family,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::InvalidAddress("10.0.0/8".to_string()).to_string(),
            "invalid CIDR notation '10.0.0/8': bad address literal"
        );
        assert_eq!(
            ParseError::InvalidPrefix("10.0.0.0/33".to_string()).to_string(),
            "invalid CIDR notation '10.0.0.0/33': bad or missing prefix length"
        );
        assert_eq!(
            InvalidAddressError("not-an-ip".to_string()).to_string(),
            "invalid IP address: not-an-ip"
        );
        assert_eq!(
            TypeMismatchError {
                address_family: Family::V6,
                subnet_family: Family::V4,
            }
            .to_string(),
            "address family mismatch: address is IPv6, subnet is IPv4"
        );
    }
}
