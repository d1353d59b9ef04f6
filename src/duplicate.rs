//! IPv4 duplicate detection.

use ahash::AHashSet;

use crate::Address;

/// Return the first IPv4 address that appears a second time.
///
/// Only addresses with a 4-byte form are checked. Repeated IPv6 addresses
/// are never reported.
pub fn find_duplicate(addresses: &[Address]) -> Option<Address> {
    let mut seen = AHashSet::with_capacity(addresses.len());

    for addr in addresses {
        let Some(key) = addr.v4_key() else {
            continue;
        };
        if !seen.insert(key) {
            return Some(*addr);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addrs(list: &[&str]) -> Vec<Address> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_no_duplicate() {
        assert_eq!(find_duplicate(&addrs(&["10.0.0.1", "10.0.0.2"])), None);
        assert_eq!(find_duplicate(&[]), None);
    }

    #[test]
    fn test_reports_first_repeat() {
        let list = addrs(&["10.0.0.1", "10.0.0.5", "10.0.0.1", "10.0.0.5"]);
        assert_eq!(find_duplicate(&list), Some("10.0.0.1".parse().unwrap()));
    }

    #[test]
    fn test_mapped_counts_as_v4() {
        let list = addrs(&["192.168.1.1", "::ffff:192.168.1.1"]);
        assert_eq!(find_duplicate(&list), Some("192.168.1.1".parse().unwrap()));
    }

    #[test]
    fn test_ipv6_repeats_ignored() {
        let list = addrs(&["2001:db8::1", "2001:db8::1", "10.0.0.1"]);
        assert_eq!(find_duplicate(&list), None);
    }
}
