//! Canonical address ordering.

use crate::Address;

/// Sort addresses ascending by canonical bytes.
///
/// IPv4 addresses come before IPv6 addresses. Sorting an already sorted
/// list returns it unchanged.
pub fn sort_addresses(mut addresses: Vec<Address>) -> Vec<Address> {
    addresses.sort_unstable();
    addresses
}

/// Check whether a list is in canonical order.
pub fn is_sorted(addresses: &[Address]) -> bool {
    addresses.windows(2).all(|w| w[0] <= w[1])
}
