//! Static region reference data.
//!
//! The catalog is loaded once at startup and consumed read-only by the
//! engine and presentation layers. It never appears inside [`SessionState`];
//! the session only stores [`RegionId`] values that the catalog vouches for.
//!
//! [`SessionState`]: crate::session::SessionState

use std::collections::HashMap;
use std::fmt;

/// Stable identifier for a matchable region.
///
/// The bundled dataset uses USPS postal codes (`"CA"`, `"TX"`), but nothing
/// in the engine depends on that shape.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One matchable region: stable id, display name, short label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionEntry {
    pub id: RegionId,
    pub name: String,
    pub abbreviation: String,
}

/// Errors surfaced while building a catalog from raw entries.
#[derive(Clone, Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("region catalog is empty")]
    Empty,

    #[error("duplicate region id: {id}")]
    DuplicateId { id: RegionId },
}

/// Validated, immutable collection of [`RegionEntry`] values.
///
/// Construction rejects duplicate ids and empty input so every consumer can
/// rely on id lookups being unambiguous.
#[derive(Clone, Debug)]
pub struct RegionCatalog {
    entries: Vec<RegionEntry>,
    index: HashMap<RegionId, usize>,
}

impl RegionCatalog {
    pub fn from_entries(entries: Vec<RegionEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }

        Ok(Self { entries, index })
    }

    /// Number of matchable regions. Completion means `matched == len()`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &RegionId) -> Option<&RegionEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionEntry> {
        self.entries.iter()
    }

    /// Entries ordered by abbreviation, the order the unmatched list renders in.
    pub fn by_abbreviation(&self) -> Vec<&RegionEntry> {
        let mut sorted: Vec<&RegionEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.abbreviation.cmp(&b.abbreviation));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> RegionEntry {
        RegionEntry {
            id: RegionId::new(id),
            name: name.to_string(),
            abbreviation: id.to_string(),
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog =
            RegionCatalog::from_entries(vec![entry("CA", "California"), entry("TX", "Texas")])
                .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&RegionId::new("CA")));
        assert!(!catalog.contains(&RegionId::new("ZZ")));
        assert_eq!(catalog.get(&RegionId::new("TX")).unwrap().name, "Texas");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result =
            RegionCatalog::from_entries(vec![entry("CA", "California"), entry("CA", "Again")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { .. })));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(
            RegionCatalog::from_entries(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn abbreviation_order_is_sorted() {
        let catalog = RegionCatalog::from_entries(vec![
            entry("TX", "Texas"),
            entry("AL", "Alabama"),
            entry("CA", "California"),
        ])
        .unwrap();

        let order: Vec<&str> = catalog
            .by_abbreviation()
            .into_iter()
            .map(|e| e.abbreviation.as_str())
            .collect();
        assert_eq!(order, vec!["AL", "CA", "TX"]);
    }
}
