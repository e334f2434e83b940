//! Processing logic built on top of the subnet models.
//!
//! - [`check`] - membership checking across many CIDR entries

mod check;

// Re-export public functions
pub use check::{check_address, CheckEntry, CheckOutcome, CheckReport};
