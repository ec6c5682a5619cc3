//! Requester IP anonymization.

use std::net::{IpAddr, SocketAddr};

/// Stored when no usable client address is available.
pub const UNKNOWN_IP: &str = "unknown";

/// Mask the host part of a client address.
///
/// IPv4 keeps the first three octets (`203.0.113.xxx`); IPv6 keeps the
/// first three groups. Anything unparsable becomes `unknown`.
pub fn anonymize_ip(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = raw
        .parse::<IpAddr>()
        .ok()
        .or_else(|| raw.parse::<SocketAddr>().ok().map(|s| s.ip()));

    match parsed {
        Some(IpAddr::V4(v4)) => {
            let [a, b, c, _] = v4.octets();
            format!("{a}.{b}.{c}.xxx")
        }
        Some(IpAddr::V6(v6)) => match v6.to_ipv4_mapped() {
            Some(v4) => anonymize_ip(&v4.to_string()),
            None => {
                let s = v6.segments();
                format!("{:x}:{:x}:{:x}::xxxx", s[0], s[1], s[2])
            }
        },
        None => UNKNOWN_IP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_masks_last_octet() {
        assert_eq!(anonymize_ip("203.0.113.42"), "203.0.113.xxx");
        assert_eq!(anonymize_ip(" 10.1.2.3 "), "10.1.2.xxx");
        assert_eq!(anonymize_ip("10.1.2.3:5555"), "10.1.2.xxx");
    }

    #[test]
    fn test_ipv6_keeps_three_groups() {
        assert_eq!(anonymize_ip("2001:db8:85a3::8a2e:370:7334"), "2001:db8:85a3::xxxx");
        assert_eq!(anonymize_ip("::ffff:192.168.0.7"), "192.168.0.xxx");
    }

    #[test]
    fn test_garbage_is_unknown() {
        assert_eq!(anonymize_ip("not-an-ip"), UNKNOWN_IP);
        assert_eq!(anonymize_ip(""), UNKNOWN_IP);
    }
}
