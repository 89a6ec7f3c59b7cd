//! Site and CSV export services

use crate::model::extra::LinkGroup;
use crate::model::links::{ext_links, file_links};
use crate::model::view::{project, sort_by_name, Category, ViewRow};
use crate::model::Catalog;
use crate::services::page::{page_file_name, render_page};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// What a site export produced
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub pages: Vec<PathBuf>,
    /// Rows rendered across all pages and categories
    pub rows: usize,
    pub default_version: String,
}

/// Render the whole site: one page per known version, plus `index.html`
/// for the default version.
pub fn export_site(
    catalog: &Catalog,
    extra_links: &[LinkGroup],
    out_dir: &Path,
    default_version: &str,
) -> Result<ExportSummary, String> {
    let versions = catalog.versions();
    if versions.is_empty() {
        return Err("Catalog has no versions to export".to_string());
    }

    fs::create_dir_all(out_dir)
        .map_err(|e| format!("Failed to create {}: {}", out_dir.display(), e))?;

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let mut pages = Vec::new();
    let mut rows = 0;

    for version in &versions {
        for category in Category::all() {
            rows += project(catalog, category, version).len();
        }
        let page = render_page(catalog, extra_links, version, &generated_at);
        let path = out_dir.join(page_file_name(version));
        fs::write(&path, &page)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        pages.push(path);
    }

    let index = render_page(catalog, extra_links, default_version, &generated_at);
    let index_path = out_dir.join("index.html");
    fs::write(&index_path, &index)
        .map_err(|e| format!("Failed to write {}: {}", index_path.display(), e))?;
    pages.push(index_path);

    info!(
        "exported {} pages ({} rows) to {}",
        pages.len(),
        rows,
        out_dir.display()
    );

    Ok(ExportSummary {
        pages,
        rows,
        default_version: default_version.to_string(),
    })
}

/// Write one version's rows for every category as CSV
pub fn export_csv(catalog: &Catalog, version: &str, path: &Path) -> Result<usize, String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
    }

    let mut writer =
        csv::Writer::from_path(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;

    writer
        .write_record(["category", "name", "version", "file", "download", "modrinth"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut count = 0;
    for category in Category::all() {
        let mut rows = project(catalog, category, version);
        sort_by_name(&mut rows);
        for row in &rows {
            writer
                .write_record(csv_record(category, row, version))
                .map_err(|e| format!("Failed to write CSV record: {}", e))?;
            count += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush {}: {}", path.display(), e))?;
    Ok(count)
}

fn csv_record(category: Category, row: &ViewRow, version: &str) -> [String; 6] {
    let links = file_links(&row.slug, row.file_id, version);
    let modrinth = match (&row.modrinth_slug, &row.modrinth_version) {
        (Some(slug), Some(id)) => ext_links(slug, id, version).version,
        _ => String::new(),
    };
    [
        category.title().to_string(),
        row.name.clone(),
        row.version.clone(),
        links.file,
        links.download,
        modrinth,
    ]
}
