//! Output formatting utilities for the CLI
//!
//! The session and ROA tables are fixed-width text. Operator tooling scrapes
//! them, so header text, column order and widths are part of the interface.

use rpki_core::ipc::{join_host_port, RoaEntry, SessionStatus};
use rpki_core::time::{elapsed_secs, format_timedelta};
use rpki_core::{Afi, RouteFamily};

/// Format a session table line
fn session_line(session: &str, state: &str, uptime: &str, records: &str) -> String {
    format!("{:<18} {:<6} {:<10} {}", session, state, uptime, records)
}

/// Header of the session table
pub fn format_session_header() -> String {
    session_line("Session", "State", "Uptime", "#IPv4/IPv6 records")
}

/// Format one session as a table row
///
/// A session that never came up reads `Down`/`never`; otherwise the uptime
/// column is the time elapsed between the session start and `now`.
///
/// # Arguments
/// * `status` - The session to format
/// * `now` - Current Unix time in seconds
pub fn format_session_row(status: &SessionStatus, now: i64) -> String {
    let (state, uptime) = if status.is_up() {
        ("Up", format_timedelta(elapsed_secs(status.uptime, now)))
    } else {
        ("Down", "never".to_string())
    };

    session_line(
        &status.address,
        state,
        &uptime,
        &format!("{}/{}", status.received_ipv4, status.received_ipv6),
    )
}

/// Column layout of the ROA table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoaLayout {
    network_width: usize,
}

impl RoaLayout {
    /// Network column width for IPv4 families
    pub const NARROW: RoaLayout = RoaLayout { network_width: 18 };
    /// Network column width for every other family
    pub const WIDE: RoaLayout = RoaLayout { network_width: 42 };

    /// Pick the layout for a resolved family
    pub fn for_family(family: RouteFamily) -> Self {
        if family.afi == Afi::IP {
            Self::NARROW
        } else {
            Self::WIDE
        }
    }

    pub fn network_width(&self) -> usize {
        self.network_width
    }

    fn line(&self, network: &str, max_len: &str, asn: &str, server: &str) -> String {
        format!(
            "{:<width$} {:<6} {:<10} {}",
            network,
            max_len,
            asn,
            server,
            width = self.network_width
        )
    }

    /// Header of the ROA table
    pub fn header(&self) -> String {
        self.line("Network", "Maxlen", "AS", "Server")
    }

    /// Format one ROA as a table row
    pub fn row(&self, roa: &RoaEntry) -> String {
        self.line(
            &format!("{}/{}", roa.prefix, roa.prefix_len),
            &roa.max_len.to_string(),
            &roa.asn.to_string(),
            &join_host_port(&roa.server_address, roa.server_port),
        )
    }
}

/// Print an error message in red with an X prefix
///
/// Outputs to stderr with red coloring for error feedback to the user.
pub fn print_error(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Red),
        Print("✗ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(address: &str, uptime: i64, v4: u64, v6: u64) -> SessionStatus {
        SessionStatus {
            address: address.to_string(),
            uptime,
            received_ipv4: v4,
            received_ipv6: v6,
        }
    }

    fn roa(prefix: &str, prefix_len: u8, max_len: u8, asn: u32, server: &str) -> RoaEntry {
        RoaEntry {
            prefix: prefix.to_string(),
            prefix_len,
            max_len,
            asn,
            server_address: server.to_string(),
            server_port: 323,
        }
    }

    #[test]
    fn test_session_header() {
        assert_eq!(
            format_session_header(),
            "Session            State  Uptime     #IPv4/IPv6 records"
        );
    }

    #[test]
    fn test_session_never_up() {
        let row = format_session_row(&session("192.0.2.1", 0, 0, 0), 1_700_000_000);
        assert_eq!(row, "192.0.2.1          Down   never      0/0");
    }

    #[test]
    fn test_session_up() {
        let now = 1_700_000_000;
        let row = format_session_row(&session("192.0.2.2", now - 3725, 1200, 340), now);
        assert_eq!(row, "192.0.2.2          Up     01:02:05   1200/340");
    }

    #[test]
    fn test_long_address_is_not_truncated() {
        let row = format_session_row(&session("2001:db8:ffff::1234:5678", 0, 1, 2), 0);
        assert!(row.starts_with("2001:db8:ffff::1234:5678 Down"));
    }

    #[test]
    fn test_layout_by_family() {
        assert_eq!(RoaLayout::for_family(RouteFamily::IPV4_UNICAST).network_width(), 18);
        assert_eq!(RoaLayout::for_family(RouteFamily::IPV4_VPN).network_width(), 18);
        assert_eq!(RoaLayout::for_family(RouteFamily::IPV6_UNICAST).network_width(), 42);
        assert_eq!(RoaLayout::for_family(RouteFamily::EVPN).network_width(), 42);
        assert_eq!(RoaLayout::for_family(RouteFamily::UNSPECIFIED).network_width(), 42);
    }

    #[test]
    fn test_roa_header() {
        assert_eq!(
            RoaLayout::NARROW.header(),
            "Network            Maxlen AS         Server"
        );
        assert_eq!(
            RoaLayout::WIDE.header(),
            format!("{:<42} Maxlen AS         Server", "Network")
        );
    }

    #[test]
    fn test_roa_row() {
        let row = RoaLayout::NARROW.row(&roa("10.0.0.0", 8, 24, 65000, "198.51.100.1"));
        assert_eq!(row, "10.0.0.0/8         24     65000      198.51.100.1:323");
    }

    #[test]
    fn test_roa_row_brackets_ipv6_server() {
        let row = RoaLayout::WIDE.row(&roa("2001:db8::", 32, 48, 64500, "2001:db8::1"));
        assert!(row.starts_with("2001:db8::/32 "));
        assert!(row.ends_with(" [2001:db8::1]:323"));
        assert_eq!(row.find("48"), Some(43));
    }
}
