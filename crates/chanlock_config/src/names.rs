//! Restricted channel name parsing.

use std::collections::BTreeSet;
use std::fmt;

/// The set of restricted channel handles, normalized for matching.
///
/// Parsed from a comma-separated list: each entry is trimmed and lowercased,
/// and empty entries are dropped.
///
/// # Examples
///
/// ```
/// use chanlock_config::RestrictedNames;
///
/// let names = RestrictedNames::parse("General, random ,, VIP");
/// assert_eq!(names.len(), 3);
/// assert!(names.contains("general"));
/// assert!(names.contains("Random"));
/// assert_eq!(names.canonical(), "general,random,vip");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictedNames(BTreeSet<String>);

impl RestrictedNames {
    /// Parse a comma-separated list.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(|name| name.trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Whether `channel_name` is restricted. The lookup ignores case.
    pub fn contains(&self, channel_name: &str) -> bool {
        self.0.contains(&channel_name.to_lowercase())
    }

    /// Sorted, comma-joined form. Parsing it yields an equal set.
    pub fn canonical(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(",")
    }

    /// Number of restricted names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no channel is restricted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for RestrictedNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
