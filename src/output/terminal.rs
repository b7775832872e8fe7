//! Terminal output utilities.
//!
//! Renders the network definition as a labeled table and host lists as a
//! bracketed list.

use crate::models::{Ipv4Address, Ipv4Mask, NetworkDefinition};
use colored::Colorize;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Width of the `---- title ----` rule above the table.
pub const TITLE_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 23;
const VALUE_WIDTH: usize = 15;
const HOST_TITLE_WIDTH: usize = 41;

/// Format a label and value as a left-aligned table row.
///
/// # Arguments
/// * `label` - The row label, including its indentation
/// * `value` - The value to show after the label column
pub fn format_row<T: ToString>(label: &str, value: T) -> String {
    let value_str = value.to_string();
    format!("{label:<LABEL_WIDTH$}{value_str:<VALUE_WIDTH$}")
}

/// Title line centered in a `-` rule.
pub fn format_title(address: Ipv4Address, mask: Ipv4Mask) -> String {
    let title = format!("Network Definition for {address} {mask}");
    format!("{title:-^TITLE_WIDTH$}")
}

/// Render the full network definition report, title included.
pub fn format_network_definition(mask: Ipv4Mask, def: &NetworkDefinition) -> String {
    let mut lines = vec![
        String::new(),
        format_title(def.address(), mask).bold().to_string(),
        String::new(),
    ];
    match def {
        NetworkDefinition::Subnet(s) => {
            lines.push(format_row("    Network Address:", s.network_address));
            lines.push(format_row("    Broadcast Address:", s.broadcast_address));
            lines.push(format_row("    Valid Hosts:", s.usable_hosts));
            lines.push(format_row("    Wildcard Mask:", s.wildcard_mask));
            lines.push(format_row("    Mask bits:", s.prefix_len));
        }
        NetworkDefinition::HostRoute(h) => {
            lines.push(format_row(&format!("    {}/32", h.address), ""));
        }
    }
    lines.join("\n")
}

/// Render requested host addresses as `'a', 'b'` inside brackets after a
/// padded title.
pub fn format_host_list<I>(hosts: I) -> String
where
    I: IntoIterator<Item = Ipv4Addr>,
{
    let title = "Valid Host IPv4 addresses for this subnet:";
    let list = hosts.into_iter().map(|h| format!("'{h}'")).join(", ");
    format!("{title:<HOST_TITLE_WIDTH$}[{list}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{derive, enumerate_hosts};

    #[test]
    fn test_format_row() {
        assert_eq!(
            format_row("    Valid Hosts:", 254),
            "    Valid Hosts:       254            "
        );
    }

    #[test]
    fn test_format_row_long_label() {
        let row = format_row("    A label longer than the column:", "x");
        assert!(row.starts_with("    A label longer than the column:x"));
    }

    #[test]
    fn test_format_title() {
        let title = format_title("8.8.8.8".parse().unwrap(), "255.255.255.0".parse().unwrap());
        assert_eq!(title.len(), TITLE_WIDTH);
        assert!(title.starts_with("--"));
        assert!(title.contains("Network Definition for 8.8.8.8 255.255.255.0"));
    }

    #[test]
    fn test_format_network_definition() {
        let mask: Ipv4Mask = "255.255.255.0".parse().unwrap();
        let def = derive("8.8.8.8".parse().unwrap(), mask);
        let report = format_network_definition(mask, &def);
        assert!(report.contains("    Network Address:   8.8.8.0"));
        assert!(report.contains("    Broadcast Address: 8.8.8.255"));
        assert!(report.contains("    Valid Hosts:       254"));
        assert!(report.contains("    Wildcard Mask:     0.0.0.255"));
        assert!(report.contains("    Mask bits:         24"));
    }

    #[test]
    fn test_format_host_route() {
        let mask: Ipv4Mask = "255.255.255.255".parse().unwrap();
        let def = derive("8.8.8.8".parse().unwrap(), mask);
        let report = format_network_definition(mask, &def);
        assert!(report.contains("    8.8.8.8/32"));
        assert!(!report.contains("Broadcast"));
        assert!(!report.contains("Wildcard"));
    }

    #[test]
    fn test_format_host_list() {
        let def = derive(
            "8.8.8.0".parse().unwrap(),
            "255.255.255.0".parse().unwrap(),
        );
        let hosts = enumerate_hosts(&def, 2).unwrap();
        assert_eq!(
            format_host_list(hosts),
            "Valid Host IPv4 addresses for this subnet:['8.8.8.1', '8.8.8.2']"
        );
    }
}
