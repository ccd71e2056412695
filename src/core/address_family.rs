use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Address Patterns
-------------------------------------------------------------------------------------------------*/

/*
    Both patterns are searched for anywhere in a candidate string; they are not anchored.
    They are intentionally loose: the IPv4 pattern accepts octets above 255, and the IPv6
    pattern carries literal `s` and `d` characters where whitespace and digit classes may
    have been intended. Vendor lists are accepted or rejected by exactly these patterns.
*/

const IPV4_PATTERN: &str = r"([0-9]{1,3}\.){3}[0-9]{1,3}(/([0-9]|[1-2][0-9]|3[0-2]))?";

const IPV6_PATTERN: &str = r"s*((([0-9A-Fa-f]{1,4}:){7}([0-9A-Fa-f]{1,4}|:))|(([0-9A-Fa-f]{1,4}:){6}(:[0-9A-Fa-f]{1,4}|((25[0-5]|2[0-4]d|1dd|[1-9]?d)(.(25[0-5]|2[0-4]d|1dd|[1-9]?d)){3})|:))|(([0-9A-Fa-f]{1,4}:){5}(((:[0-9A-Fa-f]{1,4}){1,2})|:((25[0-5]|2[0-4]d|1dd|[1-9]?d)(.(25[0-5]|2[0-4]d|1dd|[1-9]?d)){3})|:))|(([0-9A-Fa-f]{1,4}:){4}(((:[0-9A-Fa-f]{1,4}){1,3})|((:[0-9A-Fa-f]{1,4})?:((25[0-5]|2[0-4]d|1dd|[1-9]?d)(.(25[0-5]|2[0-4]d|1dd|[1-9]?d)){3}))|:))|(([0-9A-Fa-f]{1,4}:){3}(((:[0-9A-Fa-f]{1,4}){1,4})|((:[0-9A-Fa-f]{1,4}){0,2}:((25[0-5]|2[0-4]d|1dd|[1-9]?d)(.(25[0-5]|2[0-4]d|1dd|[1-9]?d)){3}))|:))|(([0-9A-Fa-f]{1,4}:){2}(((:[0-9A-Fa-f]{1,4}){1,5})|((:[0-9A-Fa-f]{1,4}){0,3}:((25[0-5]|2[0-4]d|1dd|[1-9]?d)(.(25[0-5]|2[0-4]d|1dd|[1-9]?d)){3}))|:))|(([0-9A-Fa-f]{1,4}:){1}(((:[0-9A-Fa-f]{1,4}){1,6})|((:[0-9A-Fa-f]{1,4}){0,4}:((25[0-5]|2[0-4]d|1dd|[1-9]?d)(.(25[0-5]|2[0-4]d|1dd|[1-9]?d)){3}))|:))|(:(((:[0-9A-Fa-f]{1,4}){1,7})|((:[0-9A-Fa-f]{1,4}){0,5}:((25[0-5]|2[0-4]d|1dd|[1-9]?d)(.(25[0-5]|2[0-4]d|1dd|[1-9]?d)){3}))|:)))(%.+)?s*(/([0-9]|[1-9][0-9]|1[0-1][0-9]|12[0-8]))?";

lazy_static! {
    static ref IPV4_REGEX: Regex = Regex::new(IPV4_PATTERN).unwrap();
    static ref IPV6_REGEX: Regex = Regex::new(IPV6_PATTERN).unwrap();
}

/*-------------------------------------------------------------------------------------------------
  Address Family
-------------------------------------------------------------------------------------------------*/

/// IP address family (IPv4 or IPv6) used to filter the candidate strings in a response body.
#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AddressFamily {
    IPv4,
    IPv6,
}

impl AddressFamily {
    pub fn is_ipv4(&self) -> bool {
        match self {
            AddressFamily::IPv4 => true,
            AddressFamily::IPv6 => false,
        }
    }

    pub fn is_ipv6(&self) -> bool {
        match self {
            AddressFamily::IPv4 => false,
            AddressFamily::IPv6 => true,
        }
    }

    /// Returns `true` when the family's address pattern occurs anywhere in `candidate`.
    ///
    /// ```
    /// use cdnipfacts::AddressFamily;
    ///
    /// assert!(AddressFamily::IPv4.matches("173.245.48.0/20"));
    /// assert!(AddressFamily::IPv6.matches("2400:cb00::/32"));
    /// assert!(!AddressFamily::IPv4.matches("2400:cb00::/32"));
    /// ```
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            AddressFamily::IPv4 => IPV4_REGEX.is_match(candidate),
            AddressFamily::IPv6 => IPV6_REGEX.is_match(candidate),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::IPv4 => write!(f, "IPv4"),
            AddressFamily::IPv6 => write!(f, "IPv6"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    /*----------------------------------------------------------------------------------
      AddressFamily
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_address_family_is_ipv4() {
        let ipv4 = AddressFamily::IPv4;
        assert!(ipv4.is_ipv4());
        assert!(!ipv4.is_ipv6());
    }

    #[test]
    fn test_address_family_is_ipv6() {
        let ipv6 = AddressFamily::IPv6;
        assert!(!ipv6.is_ipv4());
        assert!(ipv6.is_ipv6());
    }

    #[test]
    fn test_address_family_display() {
        assert_eq!(AddressFamily::IPv4.to_string(), "IPv4");
        assert_eq!(AddressFamily::IPv6.to_string(), "IPv6");
    }

    /*----------------------------------------------------------------------------------
      IPv4 Pattern
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_ipv4_matches_dotted_quads() {
        for candidate in ["1.1.1.1", "1.0.0.1", "0.0.0.0", "255.255.255.255"] {
            assert!(AddressFamily::IPv4.matches(candidate), "{candidate}");
        }
    }

    #[test]
    fn test_ipv4_matches_every_prefix_length() {
        for prefix_length in 0..=32 {
            let candidate = format!("103.21.244.0/{prefix_length}");
            assert!(AddressFamily::IPv4.matches(&candidate), "{candidate}");
        }
    }

    #[test]
    fn test_ipv4_accepts_out_of_range_octets() {
        assert!(AddressFamily::IPv4.matches("999.999.999.999"));
        assert!(AddressFamily::IPv4.matches("256.1.1.1/24"));
    }

    #[test]
    fn test_ipv4_rejects_fewer_than_four_groups() {
        for candidate in ["1.1.1", "10.0", "192", "1.2.3.", "", "a.b.c.d"] {
            assert!(!AddressFamily::IPv4.matches(candidate), "{candidate}");
        }
    }

    #[test]
    fn test_ipv4_matches_anywhere_in_candidate() {
        assert!(AddressFamily::IPv4.matches(" 1.1.1.1 "));
        assert!(AddressFamily::IPv4.matches("1.1.1.1\r"));
        assert!(AddressFamily::IPv4.matches("1.2.3.4.5"));
        assert!(AddressFamily::IPv4.matches("::ffff:192.0.2.128"));
    }

    #[test]
    fn test_ipv4_rejects_ipv6() {
        for candidate in ["2a04:4e40::/32", "2400:cb00::/32", "::1", "fe80::1%eth0"] {
            assert!(!AddressFamily::IPv4.matches(candidate), "{candidate}");
        }
    }

    /*----------------------------------------------------------------------------------
      IPv6 Pattern
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_ipv6_matches_full_form() {
        assert!(AddressFamily::IPv6.matches("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(AddressFamily::IPv6.matches("2001:db8:0:0:0:0:0:1"));
    }

    #[test]
    fn test_ipv6_matches_compressed_forms() {
        for candidate in [
            "::",
            "::1",
            "2a04:4e40::",
            "2400:cb00::",
            "2001:db8::8a2e:370:7334",
            "fe80::",
            "1::8",
            "1:2:3:4:5:6:7::",
        ] {
            assert!(AddressFamily::IPv6.matches(candidate), "{candidate}");
        }
    }

    #[test]
    fn test_ipv6_matches_every_prefix_length() {
        for prefix_length in 0..=128 {
            let candidate = format!("2a06:98c0::/{prefix_length}");
            assert!(AddressFamily::IPv6.matches(&candidate), "{candidate}");
        }
    }

    #[test]
    fn test_ipv6_matches_zone_id() {
        assert!(AddressFamily::IPv6.matches("fe80::1%eth0"));
        assert!(AddressFamily::IPv6.matches("fe80::1%eth0/64"));
    }

    #[test]
    fn test_ipv6_matches_mixed_notation() {
        assert!(AddressFamily::IPv6.matches("::ffff:192.0.2.128"));
        assert!(AddressFamily::IPv6.matches("64:ff9b::192.0.2.33"));
    }

    #[test]
    fn test_ipv6_matches_cloudflare_ranges() {
        for candidate in [
            "2400:cb00::/32",
            "2606:4700::/32",
            "2803:f800::/32",
            "2405:b500::/32",
            "2405:8100::/32",
            "2a06:98c0::/29",
            "2c0f:f248::/32",
        ] {
            assert!(AddressFamily::IPv6.matches(candidate), "{candidate}");
        }
    }

    #[test]
    fn test_ipv6_rejects_ipv4_and_junk() {
        for candidate in ["1.1.1.1", "23.235.32.0/20", "", "hello", "2001:db8", "a:b"] {
            assert!(!AddressFamily::IPv6.matches(candidate), "{candidate}");
        }
    }
}
