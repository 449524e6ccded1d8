//! Dotted-quad address tokens and the deduplicated sets built from them.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::digits::is_digit_char;

/// A token shaped like `D.D.D.D`, where every `D` is one or more digit
/// characters (ASCII or any other Unicode decimal or compatibility digit).
///
/// No range check is applied to the groups: `999.999.999.999` is a valid
/// `Address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Returns `Some` when `token` is a dotted-quad, `None` otherwise.
    pub fn parse(token: &str) -> Option<Address> {
        if is_dotted_quad(token) {
            Some(Address(token.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub(crate) fn is_dotted_quad(token: &str) -> bool {
    let mut groups = 0usize;
    for group in token.split('.') {
        groups += 1;
        if groups > 4 || group.is_empty() || !group.chars().all(is_digit_char) {
            return false;
        }
    }
    groups == 4
}

/// Deduplicated addresses from one source, in first-seen order.
///
/// Built once by the extractor (or collected from an iterator) and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct AddressSet {
    ordered: Vec<Address>,
    members: HashSet<Address>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, address: Address) -> bool {
        if self.members.contains(&address) {
            return false;
        }
        self.members.insert(address.clone());
        self.ordered.push(address);
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.members.contains(address)
    }

    pub fn contains_str(&self, token: &str) -> bool {
        Address::parse(token).is_some_and(|a| self.members.contains(&a))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.ordered.iter()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.ordered
    }
}

impl PartialEq for AddressSet {
    /// Set equality; insertion order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for AddressSet {}

impl FromIterator<Address> for AddressSet {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        let mut set = AddressSet::new();
        for address in iter {
            set.insert(address);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AddressSet {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}

impl Serialize for AddressSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ordered.serialize(serializer)
    }
}
