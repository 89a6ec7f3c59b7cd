//! Catalog loading services

use crate::model::extra::{AdditionalLinksDoc, LinkGroup};
use crate::model::Catalog;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load and parse the catalog document.
///
/// Any failure leaves whatever catalog was loaded before in place; the
/// caller decides how to surface the message.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let catalog: Catalog = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    if catalog.is_empty() {
        warn!("{} parsed but contains no entries", path.display());
    }
    warn_duplicate_versions(&catalog);
    Ok(catalog)
}

/// Load and parse the optional additional-links document
pub fn load_additional_links<P: AsRef<Path>>(path: P) -> Result<Vec<LinkGroup>, String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let doc: AdditionalLinksDoc = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    Ok(doc.additional_links)
}

/// An entity should carry at most one file record per version; projection
/// takes the first match, so later duplicates are dead data worth flagging.
fn warn_duplicate_versions(catalog: &Catalog) {
    let categories = [
        ("modList", &catalog.mod_list),
        ("resourcePacks", &catalog.resource_packs),
        ("shaderPacks", &catalog.shader_packs),
    ];
    for (label, entities) in categories {
        for entity in entities.iter() {
            let mut seen = HashSet::new();
            for file in &entity.files {
                if !seen.insert(file.version.as_str()) {
                    warn!(
                        "{}: entry '{}' has more than one file for version {}; using the first",
                        label, entity.name, file.version
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_catalog() {
        let file = write_temp(
            r#"{
                "banners": {"1.21.5": "spring.png"},
                "modList": [
                    {
                        "name": "Sodium",
                        "curseforge": "sodium",
                        "modrinth": "sodium",
                        "files": [{"version": "1.21.5", "cf": 5432101, "mr": "mc4pQxp1"}]
                    }
                ],
                "resourcePacks": [],
                "shaderPacks": []
            }"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.mod_list.len(), 1);
        assert_eq!(catalog.mod_list[0].files[0].cf, 5432101);
        assert_eq!(catalog.banner_for("1.21.5"), "spring.png");
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/nonexistent/mods.json").unwrap_err();
        assert!(err.contains("Failed to read"));
    }

    #[test]
    fn test_load_catalog_malformed_json() {
        let file = write_temp("{ not json");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.contains("Failed to parse"));
    }

    #[test]
    fn test_load_additional_links() {
        let file = write_temp(
            r#"{"additionalLinks": [{"name": "Server", "links": [{"title": "Map", "url": "https://example.com"}]}]}"#,
        );
        let groups = load_additional_links(file.path()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].links[0].title, "Map");
    }
}
