//! Membership checking of one address against many CIDR entries.
//!
//! Pure logic: parsing failures of individual entries become per-entry
//! outcomes so one bad line in a config file never aborts the scan.
//! Only a malformed check-target address is fatal here.

use serde::Serialize;
use std::net::IpAddr;

use crate::error::InvalidAddressError;
use crate::models::Subnet;

/// Outcome of checking the target address against one CIDR entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The address falls inside the subnet.
    InRange,
    /// Same family, but outside the subnet.
    NotInRange,
    /// The entry and the address are different address families.
    FamilyMismatch,
    /// The entry did not parse as CIDR; carries the parse error text.
    InvalidCidr(String),
}

/// One config entry plus its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    /// The CIDR text as listed.
    pub cidr: String,
    /// What the check found.
    pub outcome: CheckOutcome,
}

/// Result of checking an address against a whole CIDR list.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// The address that was checked.
    pub address: IpAddr,
    /// Per-entry outcomes, in list order.
    pub entries: Vec<CheckEntry>,
    /// True when at least one entry contains the address.
    pub found: bool,
}

/// Check `address_text` against every CIDR in `cidrs`.
///
/// Fails only when the address itself does not parse; invalid CIDR
/// entries are recorded and skipped.
pub fn check_address(
    address_text: &str,
    cidrs: &[String],
) -> Result<CheckReport, InvalidAddressError> {
    let address: IpAddr = address_text
        .trim()
        .parse()
        .map_err(|_| InvalidAddressError(address_text.trim().to_string()))?;

    let mut entries = Vec::with_capacity(cidrs.len());
    let mut found = false;
    for cidr in cidrs {
        let outcome = match Subnet::parse(cidr) {
            Ok(subnet) => match subnet.contains(address) {
                Ok(true) => {
                    found = true;
                    CheckOutcome::InRange
                }
                Ok(false) => CheckOutcome::NotInRange,
                Err(mismatch) => {
                    log::debug!("skipping {}: {}", cidr, mismatch);
                    CheckOutcome::FamilyMismatch
                }
            },
            Err(e) => {
                log::warn!("invalid CIDR entry skipped: {}", e);
                CheckOutcome::InvalidCidr(e.to_string())
            }
        };
        entries.push(CheckEntry {
            cidr: cidr.trim().to_string(),
            outcome,
        });
    }

    Ok(CheckReport {
        address,
        entries,
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cidr_list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_found_in_one_of_many() {
        let cidrs = cidr_list(&["192.168.0.0/16", "10.0.0.0/8", "172.16.0.0/12"]);
        let report = check_address("10.5.3.2", &cidrs).unwrap();

        assert!(report.found);
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.entries[0].outcome, CheckOutcome::NotInRange);
        assert_eq!(report.entries[1].outcome, CheckOutcome::InRange);
        assert_eq!(report.entries[2].outcome, CheckOutcome::NotInRange);
    }

    #[test]
    fn test_not_found_anywhere() {
        let cidrs = cidr_list(&["10.0.0.0/8"]);
        let report = check_address("11.0.0.1", &cidrs).unwrap();
        assert!(!report.found);
        assert_eq!(report.entries[0].outcome, CheckOutcome::NotInRange);
    }

    #[test]
    fn test_invalid_entry_is_skipped_not_fatal() {
        let cidrs = cidr_list(&["not-a-cidr", "10.0.0.0/8"]);
        let report = check_address("10.1.2.3", &cidrs).unwrap();

        assert!(report.found);
        assert!(matches!(
            report.entries[0].outcome,
            CheckOutcome::InvalidCidr(_)
        ));
        assert_eq!(report.entries[1].outcome, CheckOutcome::InRange);
    }

    #[test]
    fn test_family_mismatch_entry() {
        let cidrs = cidr_list(&["2001:db8::/32", "10.0.0.0/8"]);
        let report = check_address("10.1.2.3", &cidrs).unwrap();

        assert_eq!(report.entries[0].outcome, CheckOutcome::FamilyMismatch);
        assert_eq!(report.entries[1].outcome, CheckOutcome::InRange);
        assert!(report.found);
    }

    #[test]
    fn test_ipv6_membership() {
        let cidrs = cidr_list(&["2001:db8::/32"]);
        let report = check_address("2001:db8:1::42", &cidrs).unwrap();
        assert!(report.found);

        let report = check_address("2001:db9::1", &cidrs).unwrap();
        assert!(!report.found);
    }

    #[test]
    fn test_bad_target_address_is_fatal() {
        let cidrs = cidr_list(&["10.0.0.0/8"]);
        let err = check_address("300.1.2.3", &cidrs).unwrap_err();
        assert_eq!(err, InvalidAddressError("300.1.2.3".to_string()));
    }
}
