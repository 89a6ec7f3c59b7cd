//! Data models for the mod catalog (mods, resource packs, shader packs)

use crate::model::version::compare_versions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The catalog document (`mods.json`)
///
/// Loaded once at startup and treated as immutable afterwards. All
/// projection and rendering works against a shared reference to this
/// snapshot; nothing mutates it after the loader returns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Banner image filename per game version
    #[serde(default)]
    pub banners: HashMap<String, String>,
    #[serde(default)]
    pub mod_list: Vec<Entity>,
    #[serde(default)]
    pub resource_packs: Vec<Entity>,
    #[serde(default)]
    pub shader_packs: Vec<Entity>,
}

/// One tracked mod or pack, identified by its hosting-site slugs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// CurseForge project slug
    pub curseforge: String,
    /// Modrinth project slug, when the entity is mirrored there
    #[serde(default)]
    pub modrinth: Option<String>,
    /// One record per supported game version
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

/// The version-specific file reference for one entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub version: String,
    /// CurseForge file id
    pub cf: u64,
    /// Modrinth version id, when the entity is mirrored there
    #[serde(default)]
    pub mr: Option<String>,
}

/// Fallback banner used when a version has no entry in `banners`
pub const DEFAULT_BANNER: &str = "banner.png";

impl Entity {
    /// Find the file record for a game version, if any.
    ///
    /// Entities carry at most one record per version; if the data file
    /// violates that, the first record wins (the loader warns about it).
    pub fn file_for(&self, version: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.version == version)
    }
}

impl Catalog {
    /// All distinct game versions offered by the mod list, ascending.
    ///
    /// Mirrors the version dropdown: versions only a pack supports do not
    /// appear, matching how the page has always been populated.
    pub fn versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = Vec::new();
        for entity in &self.mod_list {
            for file in &entity.files {
                if !versions.iter().any(|v| *v == file.version) {
                    versions.push(file.version.clone());
                }
            }
        }
        versions.sort_by(|a, b| compare_versions(a, b));
        versions
    }

    /// Latest known version, if the catalog has any
    pub fn latest_version(&self) -> Option<String> {
        self.versions().pop()
    }

    /// Banner image filename for a version
    pub fn banner_for(&self, version: &str) -> &str {
        self.banners
            .get(version)
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_BANNER)
    }

    pub fn is_empty(&self) -> bool {
        self.mod_list.is_empty() && self.resource_packs.is_empty() && self.shader_packs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str, versions: &[&str]) -> Entity {
        Entity {
            name: name.to_string(),
            curseforge: name.to_lowercase(),
            modrinth: None,
            files: versions
                .iter()
                .enumerate()
                .map(|(i, v)| FileRecord {
                    version: v.to_string(),
                    cf: 1000 + i as u64,
                    mr: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_versions_are_distinct_and_numerically_sorted() {
        let catalog = Catalog {
            mod_list: vec![
                entity("Sodium", &["1.21.10", "1.9"]),
                entity("Lithium", &["1.21.5", "1.9"]),
            ],
            ..Default::default()
        };
        assert_eq!(catalog.versions(), vec!["1.9", "1.21.5", "1.21.10"]);
    }

    #[test]
    fn test_versions_ignore_pack_only_versions() {
        let catalog = Catalog {
            mod_list: vec![entity("Sodium", &["1.21.5"])],
            shader_packs: vec![entity("BSL", &["1.20.1"])],
            ..Default::default()
        };
        assert_eq!(catalog.versions(), vec!["1.21.5"]);
    }

    #[test]
    fn test_banner_fallback() {
        let mut banners = HashMap::new();
        banners.insert("1.21.5".to_string(), "art-spring.png".to_string());
        let catalog = Catalog {
            banners,
            ..Default::default()
        };
        assert_eq!(catalog.banner_for("1.21.5"), "art-spring.png");
        assert_eq!(catalog.banner_for("1.20.1"), DEFAULT_BANNER);
    }

    #[test]
    fn test_file_for_takes_first_match() {
        let mut e = entity("Sodium", &["1.21.5", "1.21.5"]);
        e.files[1].cf = 9999;
        let file = e.file_for("1.21.5").unwrap();
        assert_eq!(file.cf, 1000);
        assert!(e.file_for("1.8").is_none());
    }
}
