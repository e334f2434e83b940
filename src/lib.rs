// cargo watch -x 'fmt' -x 'run -- 192.168.1.0/24'

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{InvalidAddressError, ParseError, TypeMismatchError};
pub use models::{Family, HostCount, Subnet, SubnetReport};
pub use processing::{check_address, CheckOutcome, CheckReport};
