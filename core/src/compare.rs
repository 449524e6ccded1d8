//! Three-way classification of two address sets.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::address::{Address, AddressSet};

/// Membership of an address relative to the pre (first) and post (second)
/// sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Present in both sources.
    BothSources,
    /// Present only in the first source.
    MissingInSecond,
    /// Present only in the second source.
    NewInSecond,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::BothSources,
        Classification::MissingInSecond,
        Classification::NewInSecond,
    ];

    /// Label written to the Status column unless a config overrides it.
    pub fn default_label(self) -> &'static str {
        match self {
            Classification::BothSources => "Present in Pre & Post",
            Classification::MissingInSecond => "Missing in Post",
            Classification::NewInSecond => "New in Post",
        }
    }

    /// The classification the same address gets when the sources are swapped.
    pub fn mirrored(self) -> Self {
        match self {
            Classification::BothSources => Classification::BothSources,
            Classification::MissingInSecond => Classification::NewInSecond,
            Classification::NewInSecond => Classification::MissingInSecond,
        }
    }

    pub fn is_difference(self) -> bool {
        !matches!(self, Classification::BothSources)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedAddress {
    pub address: Address,
    pub classification: Classification,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub both: usize,
    pub missing_in_second: usize,
    pub new_in_second: usize,
}

impl ComparisonSummary {
    pub fn total(&self) -> usize {
        self.both + self.missing_in_second + self.new_in_second
    }

    pub fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::BothSources => self.both,
            Classification::MissingInSecond => self.missing_in_second,
            Classification::NewInSecond => self.new_in_second,
        }
    }
}

/// The classified union of two address sets.
///
/// Rows follow the first source's order, then the second source's new
/// addresses in their own order. Each address appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub entries: Vec<ClassifiedAddress>,
}

impl Comparison {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedAddress> {
        self.entries.iter()
    }

    pub fn classification_of(&self, address: &str) -> Option<Classification> {
        self.entries
            .iter()
            .find(|entry| entry.address.as_str() == address)
            .map(|entry| entry.classification)
    }

    pub fn summary(&self) -> ComparisonSummary {
        let mut summary = ComparisonSummary::default();
        for entry in &self.entries {
            match entry.classification {
                Classification::BothSources => summary.both += 1,
                Classification::MissingInSecond => summary.missing_in_second += 1,
                Classification::NewInSecond => summary.new_in_second += 1,
            }
        }
        summary
    }

    pub fn has_differences(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.classification.is_difference())
    }
}

/// Full outer join of `pre` and `post` on exact address equality.
pub fn compare(pre: &AddressSet, post: &AddressSet) -> Comparison {
    let mut entries = Vec::with_capacity(pre.len() + post.len());

    for address in pre {
        let classification = if post.contains(address) {
            Classification::BothSources
        } else {
            Classification::MissingInSecond
        };
        entries.push(ClassifiedAddress {
            address: address.clone(),
            classification,
        });
    }

    for address in post {
        if !pre.contains(address) {
            entries.push(ClassifiedAddress {
                address: address.clone(),
                classification: Classification::NewInSecond,
            });
        }
    }

    let comparison = Comparison { entries };
    let summary = comparison.summary();
    debug!(
        "compared {} pre / {} post addresses: both={}, missing={}, new={}",
        pre.len(),
        post.len(),
        summary.both,
        summary.missing_in_second,
        summary.new_in_second
    );
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_addresses;

    #[test]
    fn classifies_union_in_source_order() {
        let pre = extract_addresses("10.0.0.3 a\n10.0.0.1 b\n");
        let post = extract_addresses("10.0.0.9 c\n10.0.0.1 d\n");
        let cmp = compare(&pre, &post);

        let rows: Vec<(&str, Classification)> = cmp
            .iter()
            .map(|e| (e.address.as_str(), e.classification))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("10.0.0.3", Classification::MissingInSecond),
                ("10.0.0.1", Classification::BothSources),
                ("10.0.0.9", Classification::NewInSecond),
            ]
        );
    }

    #[test]
    fn summary_counts_each_class() {
        let pre = extract_addresses("1.1.1.1\n2.2.2.2\n3.3.3.3\n");
        let post = extract_addresses("2.2.2.2\n4.4.4.4\n");
        let summary = compare(&pre, &post).summary();
        assert_eq!(
            summary,
            ComparisonSummary {
                both: 1,
                missing_in_second: 2,
                new_in_second: 1,
            }
        );
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.count(Classification::MissingInSecond), 2);
    }

    #[test]
    fn mirrored_is_an_involution() {
        for class in Classification::ALL {
            assert_eq!(class.mirrored().mirrored(), class);
        }
        assert_eq!(
            Classification::MissingInSecond.mirrored(),
            Classification::NewInSecond
        );
    }

    #[test]
    fn default_labels_match_report_wording() {
        assert_eq!(
            Classification::BothSources.default_label(),
            "Present in Pre & Post"
        );
        assert_eq!(Classification::MissingInSecond.default_label(), "Missing in Post");
        assert_eq!(Classification::NewInSecond.default_label(), "New in Post");
    }

    #[test]
    fn empty_inputs_give_empty_comparison() {
        let cmp = compare(&AddressSet::new(), &AddressSet::new());
        assert!(cmp.is_empty());
        assert!(!cmp.has_differences());
    }
}
