//! Region catalog loader.
//!
//! Loads the matchable-region dataset from RON files. The standard US-state
//! dataset ships inside the crate; [`RegionLoader::bundled`] parses it
//! without touching the filesystem.

use std::path::Path;

use game_core::{RegionCatalog, RegionEntry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Bundled dataset: the 50 US states keyed by postal code.
const US_STATES_RON: &str = include_str!("../../data/us_states.ron");

/// Catalog data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegionsRon {
    regions: Vec<RegionEntry>,
}

/// Loader for region catalog data from RON files.
pub struct RegionLoader;

impl RegionLoader {
    /// Load a region catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<RegionCatalog> {
        let content = read_file(path)?;
        Self::from_ron(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog from {}: {}", path.display(), e))
    }

    /// The dataset compiled into the crate.
    pub fn bundled() -> LoadResult<RegionCatalog> {
        Self::from_ron(US_STATES_RON)
            .map_err(|e| anyhow::anyhow!("Bundled region dataset is invalid: {}", e))
    }

    fn from_ron(content: &str) -> LoadResult<RegionCatalog> {
        let data: RegionsRon =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse region RON: {}", e))?;
        Ok(RegionCatalog::from_entries(data.regions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_dataset_has_fifty_states() {
        let catalog = RegionLoader::bundled().unwrap();
        assert_eq!(catalog.len(), 50);
        assert_eq!(
            catalog.get(&"CA".into()).map(|e| e.name.as_str()),
            Some("California")
        );
        assert!(!catalog.contains(&"DC".into()));
    }

    #[test]
    fn bundled_abbreviations_match_ids() {
        let catalog = RegionLoader::bundled().unwrap();
        for entry in catalog.iter() {
            assert_eq!(entry.id.as_str(), entry.abbreviation);
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(regions: [(id: "CA", name: "California", abbreviation: "CA")])"#
        )
        .unwrap();

        let catalog = RegionLoader::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_ids_fail_to_load() {
        let ron = r#"(regions: [
            (id: "CA", name: "California", abbreviation: "CA"),
            (id: "CA", name: "California", abbreviation: "CA"),
        ])"#;
        assert!(RegionLoader::from_ron(ron).is_err());
    }
}
