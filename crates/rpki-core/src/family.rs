//! Route family selection
//!
//! A route family is the (AFI, SAFI) pair BGP uses to tell address families
//! apart. On the wire it travels packed into a single `u32` with the AFI in
//! the upper 16 bits, the same layout the daemon uses internally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FamilyError;

/// Address Family Identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Afi(pub u16);

impl Afi {
    pub const UNSPECIFIED: Afi = Afi(0);
    pub const IP: Afi = Afi(1);
    pub const IP6: Afi = Afi(2);
    pub const L2VPN: Afi = Afi(25);
    pub const OPAQUE: Afi = Afi(16397);
}

/// Subsequent Address Family Identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Safi(pub u8);

impl Safi {
    pub const UNSPECIFIED: Safi = Safi(0);
    pub const UNICAST: Safi = Safi(1);
    pub const MPLS_LABEL: Safi = Safi(4);
    pub const ENCAPSULATION: Safi = Safi(7);
    pub const EVPN: Safi = Safi(70);
    pub const MPLS_VPN: Safi = Safi(128);
    pub const ROUTE_TARGET_CONSTRAINTS: Safi = Safi(132);
    pub const FLOW_SPEC_UNICAST: Safi = Safi(133);
    pub const FLOW_SPEC_VPN: Safi = Safi(134);
    pub const KEY_VALUE: Safi = Safi(241);
}

/// An (AFI, SAFI) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteFamily {
    pub afi: Afi,
    pub safi: Safi,
}

impl RouteFamily {
    /// Family value meaning "let the daemon decide"
    pub const UNSPECIFIED: RouteFamily = RouteFamily::new(Afi::UNSPECIFIED, Safi::UNSPECIFIED);
    pub const IPV4_UNICAST: RouteFamily = RouteFamily::new(Afi::IP, Safi::UNICAST);
    pub const IPV6_UNICAST: RouteFamily = RouteFamily::new(Afi::IP6, Safi::UNICAST);
    pub const IPV4_VPN: RouteFamily = RouteFamily::new(Afi::IP, Safi::MPLS_VPN);
    pub const IPV6_VPN: RouteFamily = RouteFamily::new(Afi::IP6, Safi::MPLS_VPN);
    pub const IPV4_MPLS: RouteFamily = RouteFamily::new(Afi::IP, Safi::MPLS_LABEL);
    pub const IPV6_MPLS: RouteFamily = RouteFamily::new(Afi::IP6, Safi::MPLS_LABEL);
    pub const EVPN: RouteFamily = RouteFamily::new(Afi::L2VPN, Safi::EVPN);
    pub const IPV4_ENCAP: RouteFamily = RouteFamily::new(Afi::IP, Safi::ENCAPSULATION);
    pub const IPV6_ENCAP: RouteFamily = RouteFamily::new(Afi::IP6, Safi::ENCAPSULATION);
    pub const RTC_UNICAST: RouteFamily = RouteFamily::new(Afi::IP, Safi::ROUTE_TARGET_CONSTRAINTS);
    pub const FLOWSPEC_IPV4: RouteFamily = RouteFamily::new(Afi::IP, Safi::FLOW_SPEC_UNICAST);
    pub const FLOWSPEC_IPV6: RouteFamily = RouteFamily::new(Afi::IP6, Safi::FLOW_SPEC_UNICAST);
    pub const FLOWSPEC_IPV4_VPN: RouteFamily = RouteFamily::new(Afi::IP, Safi::FLOW_SPEC_VPN);
    pub const FLOWSPEC_IPV6_VPN: RouteFamily = RouteFamily::new(Afi::IP6, Safi::FLOW_SPEC_VPN);
    pub const FLOWSPEC_L2_VPN: RouteFamily = RouteFamily::new(Afi::L2VPN, Safi::FLOW_SPEC_VPN);
    pub const OPAQUE: RouteFamily = RouteFamily::new(Afi::OPAQUE, Safi::KEY_VALUE);

    pub const fn new(afi: Afi, safi: Safi) -> Self {
        Self { afi, safi }
    }

    /// Resolve a user supplied token, falling back to `default` for an
    /// empty token
    pub fn resolve(token: &str, default: RouteFamily) -> Result<Self, FamilyError> {
        if token.is_empty() {
            return Ok(default);
        }
        token.parse()
    }

    /// Packed representation: AFI in the upper 16 bits, SAFI in the lowest 8
    pub const fn to_u32(self) -> u32 {
        ((self.afi.0 as u32) << 16) | self.safi.0 as u32
    }

    pub const fn from_u32(value: u32) -> Self {
        Self {
            afi: Afi((value >> 16) as u16),
            safi: Safi((value & 0xff) as u8),
        }
    }
}

impl FromStr for RouteFamily {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let family = match s {
            "ipv4" | "v4" | "4" => Self::IPV4_UNICAST,
            "ipv6" | "v6" | "6" => Self::IPV6_UNICAST,
            "vpnv4" | "vpn-ipv4" => Self::IPV4_VPN,
            "vpnv6" | "vpn-ipv6" => Self::IPV6_VPN,
            "ipv4-labeled" | "ipv4-labelled" | "ipv4-mpls" => Self::IPV4_MPLS,
            "ipv6-labeled" | "ipv6-labelled" | "ipv6-mpls" => Self::IPV6_MPLS,
            "evpn" => Self::EVPN,
            "encap" | "ipv4-encap" => Self::IPV4_ENCAP,
            "ipv6-encap" => Self::IPV6_ENCAP,
            "rtc" => Self::RTC_UNICAST,
            "ipv4-flowspec" | "ipv4-flow" | "flow4" => Self::FLOWSPEC_IPV4,
            "ipv6-flowspec" | "ipv6-flow" | "flow6" => Self::FLOWSPEC_IPV6,
            "ipv4-l3vpn-flowspec" | "ipv4vpn-flowspec" | "flowvpn4" => Self::FLOWSPEC_IPV4_VPN,
            "ipv6-l3vpn-flowspec" | "ipv6vpn-flowspec" | "flowvpn6" => Self::FLOWSPEC_IPV6_VPN,
            "l2vpn-flowspec" => Self::FLOWSPEC_L2_VPN,
            "opaque" => Self::OPAQUE,
            other => return Err(FamilyError::Unsupported(other.to_string())),
        };
        Ok(family)
    }
}

impl fmt::Display for RouteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "afi={} safi={}", self.afi.0, self.safi.0)
    }
}

impl Default for RouteFamily {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl Serialize for RouteFamily {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_u32())
    }
}

impl<'de> Deserialize<'de> for RouteFamily {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve_to_same_family() {
        for token in ["ipv4", "v4", "4"] {
            assert_eq!(token.parse::<RouteFamily>().unwrap(), RouteFamily::IPV4_UNICAST);
        }
        for token in ["ipv6", "v6", "6"] {
            assert_eq!(token.parse::<RouteFamily>().unwrap(), RouteFamily::IPV6_UNICAST);
        }
        assert_eq!(
            "ipv4-labelled".parse::<RouteFamily>().unwrap(),
            "ipv4-mpls".parse::<RouteFamily>().unwrap()
        );
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = "ipv5".parse::<RouteFamily>().unwrap_err();
        assert_eq!(err, FamilyError::Unsupported("ipv5".to_string()));
        assert_eq!(err.to_string(), "unsupported address family: ipv5");
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!("IPv4".parse::<RouteFamily>().is_err());
    }

    #[test]
    fn test_empty_token_uses_default() {
        let family = RouteFamily::resolve("", RouteFamily::UNSPECIFIED).unwrap();
        assert_eq!(family, RouteFamily::UNSPECIFIED);
        assert_eq!(family.afi, Afi::UNSPECIFIED);

        let family = RouteFamily::resolve("", RouteFamily::IPV6_UNICAST).unwrap();
        assert_eq!(family, RouteFamily::IPV6_UNICAST);
    }

    #[test]
    fn test_packed_layout() {
        assert_eq!(RouteFamily::IPV4_UNICAST.to_u32(), 65537);
        assert_eq!(RouteFamily::IPV6_UNICAST.to_u32(), 131073);
        assert_eq!(RouteFamily::EVPN.to_u32(), (25 << 16) | 70);
        assert_eq!(RouteFamily::from_u32(65537), RouteFamily::IPV4_UNICAST);
        assert_eq!(RouteFamily::UNSPECIFIED.to_u32(), 0);
    }

    #[test]
    fn test_serializes_as_packed_integer() {
        let json = serde_json::to_string(&RouteFamily::IPV6_UNICAST).unwrap();
        assert_eq!(json, "131073");

        let decoded: RouteFamily = serde_json::from_str("65537").unwrap();
        assert_eq!(decoded.afi, Afi::IP);
    }
}
