//! Projection of the catalog into per-version view rows

use crate::model::catalog::Catalog;

/// The three rendered catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mods,
    ResourcePacks,
    ShaderPacks,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![Category::Mods, Category::ResourcePacks, Category::ShaderPacks]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Mods => "Fabric Mods",
            Category::ResourcePacks => "Resource Packs",
            Category::ShaderPacks => "Shader Packs",
        }
    }

    /// Element id of this category's output region in the rendered page
    pub fn region_id(&self) -> &'static str {
        match self {
            Category::Mods => "fabric-mods",
            Category::ResourcePacks => "resource-packs",
            Category::ShaderPacks => "shader-packs",
        }
    }
}

/// One visible row, derived from an entity and its matching file record.
///
/// Rebuilt from the catalog on every version change and thrown away
/// afterwards; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub name: String,
    pub slug: String,
    /// The matched file record's own version label
    pub version: String,
    pub file_id: u64,
    pub modrinth_slug: Option<String>,
    pub modrinth_version: Option<String>,
}

/// Project one category of the catalog down to the rows available for a
/// game version.
///
/// Entities with no file record for the version are omitted entirely. At
/// most one row is produced per entity. Output keeps the catalog's own
/// entity order; display sorting is the renderer's concern.
pub fn project(catalog: &Catalog, category: Category, version: &str) -> Vec<ViewRow> {
    let entities = match category {
        Category::Mods => &catalog.mod_list,
        Category::ResourcePacks => &catalog.resource_packs,
        Category::ShaderPacks => &catalog.shader_packs,
    };

    entities
        .iter()
        .filter_map(|entity| {
            let file = entity.file_for(version)?;
            Some(ViewRow {
                name: entity.name.clone(),
                slug: entity.curseforge.clone(),
                version: file.version.clone(),
                file_id: file.cf,
                modrinth_slug: entity.modrinth.clone(),
                modrinth_version: file.mr.clone(),
            })
        })
        .collect()
}

/// Sort rows by display name, case-insensitive, ascending.
///
/// The sort is stable, so rows whose names differ only by case keep their
/// catalog order relative to each other.
pub fn sort_by_name(rows: &mut [ViewRow]) {
    rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Entity, FileRecord};

    fn catalog() -> Catalog {
        Catalog {
            mod_list: vec![
                Entity {
                    name: "Zeta".to_string(),
                    curseforge: "zeta".to_string(),
                    modrinth: Some("zeta".to_string()),
                    files: vec![
                        FileRecord {
                            version: "1.20".to_string(),
                            cf: 11,
                            mr: Some("aA11bB22".to_string()),
                        },
                        FileRecord {
                            version: "1.21".to_string(),
                            cf: 12,
                            mr: None,
                        },
                    ],
                },
                Entity {
                    name: "alpha".to_string(),
                    curseforge: "alpha".to_string(),
                    modrinth: None,
                    files: vec![FileRecord {
                        version: "1.21".to_string(),
                        cf: 21,
                        mr: None,
                    }],
                },
                Entity {
                    name: "Beta".to_string(),
                    curseforge: "beta".to_string(),
                    modrinth: None,
                    files: vec![FileRecord {
                        version: "1.20".to_string(),
                        cf: 31,
                        mr: None,
                    }],
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_project_matches_requested_version_exactly() {
        let rows = project(&catalog(), Category::Mods, "1.21");
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.version, "1.21");
        }
    }

    #[test]
    fn test_project_omits_entities_without_a_match() {
        let rows = project(&catalog(), Category::Mods, "1.20");
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Beta"]);
    }

    #[test]
    fn test_project_unknown_version_yields_empty() {
        // Records for 1.20 and 1.21 only; 1.22 matches nothing
        assert!(project(&catalog(), Category::Mods, "1.22").is_empty());
    }

    #[test]
    fn test_project_never_duplicates_an_entity() {
        let mut c = catalog();
        c.mod_list[0].files.push(FileRecord {
            version: "1.21".to_string(),
            cf: 99,
            mr: None,
        });
        let rows = project(&c, Category::Mods, "1.21");
        let zeta_rows = rows.iter().filter(|r| r.name == "Zeta").count();
        assert_eq!(zeta_rows, 1);
        // First record wins
        assert_eq!(rows[0].file_id, 12);
    }

    #[test]
    fn test_project_preserves_insertion_order() {
        let rows = project(&catalog(), Category::Mods, "1.21");
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "alpha"]);
    }

    #[test]
    fn test_project_carries_modrinth_fields() {
        let rows = project(&catalog(), Category::Mods, "1.20");
        assert_eq!(rows[0].modrinth_slug.as_deref(), Some("zeta"));
        assert_eq!(rows[0].modrinth_version.as_deref(), Some("aA11bB22"));
        assert_eq!(rows[1].modrinth_slug, None);
    }

    #[test]
    fn test_empty_category_projects_empty() {
        assert!(project(&catalog(), Category::ShaderPacks, "1.21").is_empty());
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut rows = project(&catalog(), Category::Mods, "1.20");
        rows.extend(project(&catalog(), Category::Mods, "1.21"));
        sort_by_name(&mut rows);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "Zeta", "Zeta"]);
    }
}
