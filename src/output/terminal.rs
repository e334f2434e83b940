//! Colored terminal rendering of subnet and check reports.
//!
//! Render functions build plain strings so the layout is testable; the
//! `print_*` wrappers just write them to stdout.

use colored::Colorize;
use std::path::Path;

use crate::models::SubnetReport;
use crate::processing::{CheckOutcome, CheckReport};

/// Render the display-mode record for one subnet.
pub fn render_subnet_report(report: &SubnetReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "CIDR Information".bright_cyan().bold()));
    out.push_str(&line("CIDR:", &report.cidr));
    out.push_str(&line("Network Address:", &report.network_address.to_string()));
    out.push_str(&line("Subnet Mask:", &report.subnet_mask.to_string()));
    out.push_str(&line(
        "Broadcast Address:",
        &report.broadcast_address.to_string(),
    ));
    out.push('\n');
    out.push_str(&line(
        "IP Range:",
        &format!("{} - {}", report.network_address, report.broadcast_address),
    ));
    // A /31 or /32 (or /127, /128) has no real usable pair; the raw
    // first/last values would read inverted, so they are not shown.
    if report.usable_hosts > 0 {
        out.push_str(&line(
            "Usable IPs:",
            &format!("{} - {}", report.first_usable, report.last_usable),
        ));
    } else {
        out.push_str(&line("Usable IPs:", "none"));
    }
    out.push('\n');
    out.push_str(&line("Total Hosts:", &report.total_hosts.to_string()));
    out.push_str(&line("Usable Hosts:", &report.usable_hosts.to_string()));

    out
}

/// Render the check-mode result for one address against many CIDRs.
pub fn render_check_report(report: &CheckReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "IP Address Check".bright_cyan().bold()));
    out.push_str(&line("Checking IP:", &report.address.to_string()));
    out.push('\n');

    for entry in &report.entries {
        let row = match &entry.outcome {
            CheckOutcome::InRange => format!(
                "{} IP is in {}",
                "✓".green().bold(),
                entry.cidr.bright_blue()
            ),
            CheckOutcome::NotInRange => {
                format!("{} IP is not in {}", "○".yellow(), entry.cidr)
            }
            CheckOutcome::FamilyMismatch => format!(
                "{} {} is a different address family",
                "○".bright_black(),
                entry.cidr
            ),
            CheckOutcome::InvalidCidr(_) => {
                format!("{} Invalid CIDR: {}", "✗".red().bold(), entry.cidr)
            }
        };
        out.push_str(&row);
        out.push('\n');
    }

    out.push('\n');
    if report.found {
        out.push_str(&format!(
            "{}\n",
            "IP address found in one or more CIDR ranges".green().bold()
        ));
    } else {
        out.push_str(&format!(
            "{}\n",
            "IP address not found in any CIDR ranges".red().bold()
        ));
    }

    out
}

/// One `Label: value` line.
fn line(label: &str, value: &str) -> String {
    format!("{} {}\n", label.magenta().bold(), value.bright_blue())
}

/// Dim note naming the config file the entries came from.
pub fn print_config_source(path: &Path) {
    println!(
        "{}",
        format!("Using config from: {}", path.display()).bright_black()
    );
    println!();
}

/// Dim closing hint, printed once per run.
pub fn print_help_hint() {
    println!();
    println!(
        "{}",
        "Run 'cidr --help' for more options".bright_black().italic()
    );
}

/// Print the display-mode record for one subnet.
pub fn print_subnet_report(report: &SubnetReport) {
    print!("{}", render_subnet_report(report));
}

/// Print the check-mode result.
pub fn print_check_report(report: &CheckReport) {
    print!("{}", render_check_report(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;
    use crate::processing::check_address;

    fn plain(text: &str) -> String {
        // Strip ANSI escapes so the layout can be asserted regardless
        // of whether the test runner is a tty.
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for e in chars.by_ref() {
                    if e == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_render_subnet_report_layout() {
        let subnet = Subnet::parse("192.168.1.0/24").unwrap();
        let rendered = plain(&render_subnet_report(&SubnetReport::new(&subnet)));

        assert!(rendered.starts_with("CIDR Information\n"));
        assert!(rendered.contains("CIDR: 192.168.1.0/24\n"));
        assert!(rendered.contains("Subnet Mask: 255.255.255.0\n"));
        assert!(rendered.contains("IP Range: 192.168.1.0 - 192.168.1.255\n"));
        assert!(rendered.contains("Usable IPs: 192.168.1.1 - 192.168.1.254\n"));
        assert!(rendered.contains("Total Hosts: 256\n"));
        assert!(rendered.contains("Usable Hosts: 254\n"));
    }

    #[test]
    fn test_render_subnet_report_hides_bogus_usable_range() {
        let subnet = Subnet::parse("192.168.1.7/32").unwrap();
        let rendered = plain(&render_subnet_report(&SubnetReport::new(&subnet)));
        assert!(rendered.contains("Usable IPs: none\n"));
        assert!(rendered.contains("Usable Hosts: 0\n"));
    }

    #[test]
    fn test_render_check_report_layout() {
        let cidrs = vec!["bad".to_string(), "10.0.0.0/8".to_string()];
        let report = check_address("10.5.3.2", &cidrs).unwrap();
        let rendered = plain(&render_check_report(&report));

        assert!(rendered.starts_with("IP Address Check\n"));
        assert!(rendered.contains("Checking IP: 10.5.3.2\n"));
        assert!(rendered.contains("✗ Invalid CIDR: bad\n"));
        assert!(rendered.contains("✓ IP is in 10.0.0.0/8\n"));
        assert!(rendered.contains("IP address found in one or more CIDR ranges\n"));
    }

    #[test]
    fn test_render_check_report_not_found() {
        let cidrs = vec!["10.0.0.0/8".to_string()];
        let report = check_address("11.0.0.1", &cidrs).unwrap();
        let rendered = plain(&render_check_report(&report));

        assert!(rendered.contains("○ IP is not in 10.0.0.0/8\n"));
        assert!(rendered.contains("IP address not found in any CIDR ranges\n"));
    }
}
