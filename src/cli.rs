//! Command-line surface: argument parsing and run orchestration.
//!
//! All presentation and exit-code policy lives here; the models stay
//! pure. Display mode aborts on the first malformed CIDR, check mode
//! skips bad entries and keeps scanning.

use clap::Parser;
use std::error::Error;

use crate::config;
use crate::models::{Subnet, SubnetReport};
use crate::output::{json, terminal};
use crate::processing::check_address;

/// Parse CIDR subnet masks and display human-readable IP ranges.
///
/// Check if an IP address belongs to a CIDR range. Load default CIDRs
/// from a ~/.cidr file, one per line.
#[derive(Parser, Debug)]
#[command(
    name = "cidr",
    version,
    about = "A CIDR subnet parser",
    after_help = "Examples:\n  cidr 192.168.1.0/24\n  cidr 10.0.0.0/8 --check 10.5.3.2\n  cidr --check 172.16.0.5"
)]
pub struct Args {
    /// CIDR notation to inspect, e.g. 192.168.1.0/24
    pub cidr: Option<String>,

    /// Check if an IP address is within the CIDR range(s)
    #[arg(short, long, value_name = "IP")]
    pub check: Option<String>,

    /// Path to a .cidr config file (defaults to ~/.cidr)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub config: Option<String>,

    /// Emit JSON instead of colored text
    #[arg(long)]
    pub json: bool,

    /// Log more detail to stderr (repeat for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Execute one invocation. Returns an error for the caller to print;
/// never exits the process itself.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut cidrs: Vec<String> = Vec::new();
    let mut config_path = None;

    if let Some(cidr) = &args.cidr {
        cidrs.push(cidr.clone());
    }

    // Fall back to the config file when no CIDR was given; when
    // checking an IP the file entries are scanned as well.
    if cidrs.is_empty() || args.check.is_some() {
        match config::load_cidr_file(args.config.as_deref()) {
            Ok((entries, path)) => {
                cidrs.extend(entries);
                config_path = Some(path);
            }
            Err(e) if cidrs.is_empty() => {
                return Err(
                    format!("no CIDR provided and could not load config file: {}", e).into(),
                );
            }
            Err(e) => log::debug!("config file not loaded: {}", e),
        }
    }

    if cidrs.is_empty() {
        return Err("please provide a CIDR notation or create a ~/.cidr file with CIDR ranges".into());
    }

    if let Some(path) = &config_path {
        if !args.json {
            terminal::print_config_source(path);
        }
    }

    if let Some(check_ip) = &args.check {
        let report = check_address(check_ip, &cidrs)?;
        if args.json {
            println!("{}", json::render_check_report(&report)?);
        } else {
            terminal::print_check_report(&report);
        }
    } else if args.json {
        let reports = build_reports(&cidrs)?;
        println!("{}", json::render_subnet_reports(&reports)?);
    } else {
        for (i, report) in build_reports(&cidrs)?.iter().enumerate() {
            if i > 0 {
                println!();
            }
            terminal::print_subnet_report(report);
        }
    }

    if !args.json {
        terminal::print_help_hint();
    }

    Ok(())
}

/// Parse every CIDR for display mode; the first bad entry aborts.
fn build_reports(cidrs: &[String]) -> Result<Vec<SubnetReport>, Box<dyn Error>> {
    cidrs
        .iter()
        .map(|cidr| Ok(SubnetReport::new(&Subnet::parse(cidr)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_display_mode() {
        let args = Args::parse_from(["cidr", "192.168.1.0/24"]);
        assert_eq!(args.cidr.as_deref(), Some("192.168.1.0/24"));
        assert!(args.check.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_args_parse_check_mode() {
        let args = Args::parse_from(["cidr", "10.0.0.0/8", "--check", "10.5.3.2"]);
        assert_eq!(args.cidr.as_deref(), Some("10.0.0.0/8"));
        assert_eq!(args.check.as_deref(), Some("10.5.3.2"));
    }

    #[test]
    fn test_args_parse_config_and_flags() {
        let args = Args::parse_from(["cidr", "-c", "172.16.0.5", "-f", "/tmp/ranges", "-vv"]);
        assert_eq!(args.check.as_deref(), Some("172.16.0.5"));
        assert_eq!(args.config.as_deref(), Some("/tmp/ranges"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_build_reports_aborts_on_bad_entry() {
        let cidrs = vec!["10.0.0.0/8".to_string(), "bogus".to_string()];
        assert!(build_reports(&cidrs).is_err());

        let good = vec!["10.0.0.0/8".to_string()];
        assert_eq!(build_reports(&good).unwrap().len(), 1);
    }

    #[test]
    fn test_run_without_input_errors() {
        let args = Args::parse_from(["cidr", "-f", "/nonexistent/.cidr"]);
        assert!(run(&args).is_err());
    }
}
