//! Exclusion-set filtering.

use ahash::AHashSet;

use crate::Address;

/// Set of address string forms to drop from a list.
///
/// Membership is by canonical string, so `::ffff:10.0.0.1` in the exclusion
/// file removes `10.0.0.1` from the input.
#[derive(Debug, Default)]
pub struct ExclusionSet {
    addrs: AHashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from loaded addresses.
    pub fn from_addresses<'a>(addresses: impl IntoIterator<Item = &'a Address>) -> Self {
        Self {
            addrs: addresses.into_iter().map(Address::to_string).collect(),
        }
    }

    /// Get the number of distinct addresses in the set.
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// Check if an address is excluded.
    pub fn contains(&self, addr: &Address) -> bool {
        self.addrs.contains(&addr.to_string())
    }

    /// Keep only the addresses not in this set, preserving order.
    pub fn filter(&self, addresses: Vec<Address>) -> Vec<Address> {
        if self.is_empty() {
            return addresses;
        }
        addresses.into_iter().filter(|a| !self.contains(a)).collect()
    }
}

/// Remove every member of `removals` from `addresses`, preserving order.
pub fn exclude(addresses: Vec<Address>, removals: &[Address]) -> Vec<Address> {
    ExclusionSet::from_addresses(removals).filter(addresses)
}
