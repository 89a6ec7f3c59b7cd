//! Static page rendering
//!
//! Builds the published HTML page for one game version: three category
//! regions, the additional-links section, and the banner art header. The
//! whole page is rebuilt from the catalog snapshot on every call; regions
//! are replaced wholesale, never patched.

use crate::model::extra::LinkGroup;
use crate::model::links::{ext_links, file_links};
use crate::model::view::{project, sort_by_name, Category, ViewRow};
use crate::model::Catalog;

/// Escape text for use in HTML content or a double-quoted attribute
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `<div class="...">...</div>` with the class attribute omitted when empty.
/// The inner content is the caller's responsibility (already-built markup).
fn element(tag: &str, class: &str, inner: &str) -> String {
    if class.is_empty() {
        format!("<{tag}>{inner}</{tag}>")
    } else {
        format!("<{tag} class=\"{class}\">{inner}</{tag}>")
    }
}

/// External anchor; all outbound links open in a new tab
fn anchor(text: &str, href: &str) -> String {
    format!(
        "<a target=\"_blank\" href=\"{}\">{}</a>",
        html_escape(href),
        html_escape(text)
    )
}

/// File name of the published page for one version
pub fn page_file_name(version: &str) -> String {
    format!("mods-{}.html", version)
}

/// Build one row of a category region.
///
/// Mods get List / File / Download plus the Modrinth version badge; packs
/// get List / Download. The version cell carries the `mismatch` class when
/// the row's own version differs from the version the page is built for.
fn render_row(category: Category, row: &ViewRow, selected_version: &str) -> String {
    let links = file_links(&row.slug, row.file_id, selected_version);

    let mut name_inner = html_escape(&row.name);
    if category == Category::Mods {
        if let (Some(slug), Some(version_id)) = (&row.modrinth_slug, &row.modrinth_version) {
            let ext = ext_links(slug, version_id, selected_version);
            name_inner.push_str(&format!(
                "<a class=\"ext-link\" title=\"Modrinth Version\" target=\"_blank\" href=\"{}\">v{}</a>",
                html_escape(&ext.version),
                html_escape(version_id)
            ));
        }
    }
    let name = element("div", "col-4 mod-name", &name_inner);

    let version_class = if row.version == selected_version {
        "col-4 mod-version"
    } else {
        "col-4 mod-version mismatch"
    };
    let version = element("div", version_class, &html_escape(&row.version));

    let link_inner = match category {
        Category::Mods => format!(
            "{}<br>{}<br>{}",
            anchor("List", &links.list),
            anchor("File", &links.file),
            anchor("Download", &links.download)
        ),
        Category::ResourcePacks | Category::ShaderPacks => format!(
            "{}<br>{}",
            anchor("List", &links.list),
            anchor("Download", &links.download)
        ),
    };
    let link = element("div", "col-4 mod-link", &link_inner);

    element("div", "row mod-row", &format!("{name}{version}{link}"))
}

/// Render one category region: project, sort by name, emit rows
pub fn render_region(catalog: &Catalog, category: Category, version: &str) -> String {
    let mut rows = project(catalog, category, version);
    sort_by_name(&mut rows);

    let mut out = String::new();
    for row in &rows {
        out.push_str("      ");
        out.push_str(&render_row(category, row, version));
        out.push('\n');
    }
    out
}

/// Render the version-independent additional-links section rows
pub fn render_additional_links(groups: &[LinkGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let name = element("div", "col-6 mod-name", &html_escape(&group.name));
        let mut link_inner = String::new();
        for (i, link) in group.links.iter().enumerate() {
            if i > 0 {
                link_inner.push_str("<br>");
            }
            link_inner.push_str(&anchor(&link.title, &link.url));
        }
        let links = element("div", "col-6 mod-link", &link_inner);
        out.push_str("      ");
        out.push_str(&element("div", "row mod-row", &format!("{name}{links}")));
        out.push('\n');
    }
    out
}

fn render_version_nav(catalog: &Catalog, selected: &str) -> String {
    let mut out = String::new();
    for version in catalog.versions() {
        let class = if version == selected {
            "version-link current"
        } else {
            "version-link"
        };
        out.push_str(&format!(
            "<a class=\"{}\" href=\"{}\">{}</a>\n",
            class,
            html_escape(&page_file_name(&version)),
            html_escape(&version)
        ));
    }
    out
}

const PAGE_CSS: &str = "\
    body { font-family: sans-serif; margin: 0; background: #1d1f21; color: #e8e8e8; }\n\
    main { max-width: 960px; margin: 0 auto; padding: 1rem; }\n\
    a { color: #7fb4e8; }\n\
    .game-header-art { background-size: cover; background-position: center; padding: 3rem 1rem; text-align: center; }\n\
    .version-nav a { margin-right: 0.75rem; }\n\
    .version-nav .current { font-weight: bold; text-decoration: none; color: #e8e8e8; }\n\
    .row { display: flex; border-bottom: 1px solid #333; padding: 0.4rem 0; }\n\
    .col-4 { flex: 1; }\n\
    .col-6 { flex: 1; }\n\
    .ext-link { margin-left: 0.5rem; font-size: 0.8em; }\n\
    .mismatch { color: #e06c75; }\n\
    h2 { border-bottom: 2px solid #444; padding-bottom: 0.25rem; }\n";

/// Render the complete page for one version.
///
/// Pure with respect to its arguments: the same catalog, links, version and
/// timestamp produce byte-identical output.
pub fn render_page(
    catalog: &Catalog,
    extra_links: &[LinkGroup],
    version: &str,
    generated_at: &str,
) -> String {
    let banner = catalog.banner_for(version);

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("  <meta charset=\"utf-8\">\n");
    page.push_str(&format!(
        "  <title>Mod List - {}</title>\n",
        html_escape(version)
    ));
    page.push_str("  <style>\n");
    page.push_str(PAGE_CSS);
    page.push_str("  </style>\n</head>\n<body>\n");

    page.push_str(&format!(
        "  <header class=\"game-header-art\" style=\"background-image: url(./img/{})\">\n",
        html_escape(banner)
    ));
    page.push_str(&format!(
        "    <h1>Mod List - {}</h1>\n",
        html_escape(version)
    ));
    page.push_str("    <nav class=\"version-nav\">\n");
    page.push_str(&render_version_nav(catalog, version));
    page.push_str("    </nav>\n  </header>\n  <main>\n");

    for category in Category::all() {
        page.push_str(&format!(
            "    <h2>{}</h2>\n    <section id=\"{}\">\n",
            category.title(),
            category.region_id()
        ));
        page.push_str(&render_region(catalog, category, version));
        page.push_str("    </section>\n");
    }

    if !extra_links.is_empty() {
        page.push_str("    <h2>Additional Links</h2>\n    <section id=\"additional-links\">\n");
        page.push_str(&render_additional_links(extra_links));
        page.push_str("    </section>\n");
    }

    page.push_str("  </main>\n");
    page.push_str(&format!("  <!-- generated {} -->\n", generated_at));
    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Entity, FileRecord};
    use crate::model::extra::LinkRef;

    fn file(version: &str, cf: u64) -> FileRecord {
        FileRecord {
            version: version.to_string(),
            cf,
            mr: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            mod_list: vec![
                Entity {
                    name: "Zeta".to_string(),
                    curseforge: "zeta".to_string(),
                    modrinth: Some("zeta".to_string()),
                    files: vec![FileRecord {
                        version: "1.21.5".to_string(),
                        cf: 11,
                        mr: Some("aA11bB22".to_string()),
                    }],
                },
                Entity {
                    name: "alpha".to_string(),
                    curseforge: "alpha".to_string(),
                    modrinth: None,
                    files: vec![file("1.21.5", 21)],
                },
                Entity {
                    name: "Beta".to_string(),
                    curseforge: "beta".to_string(),
                    modrinth: None,
                    files: vec![file("1.21.5", 31)],
                },
            ],
            resource_packs: vec![Entity {
                name: "Faithful".to_string(),
                curseforge: "faithful".to_string(),
                modrinth: None,
                files: vec![file("1.21.5", 41)],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_region_rows_sorted_case_insensitively() {
        let region = render_region(&catalog(), Category::Mods, "1.21.5");
        let alpha = region.find("alpha").unwrap();
        let beta = region.find("Beta").unwrap();
        let zeta = region.find("Zeta").unwrap();
        assert!(alpha < beta && beta < zeta);
    }

    #[test]
    fn test_mod_rows_carry_three_links_packs_two() {
        let mods = render_region(&catalog(), Category::Mods, "1.21.5");
        assert!(mods.contains(">List</a>"));
        assert!(mods.contains(">File</a>"));
        assert!(mods.contains(">Download</a>"));

        let packs = render_region(&catalog(), Category::ResourcePacks, "1.21.5");
        assert!(packs.contains(">List</a>"));
        assert!(!packs.contains(">File</a>"));
        assert!(packs.contains(">Download</a>"));
    }

    #[test]
    fn test_modrinth_badge_shows_version_id() {
        let region = render_region(&catalog(), Category::Mods, "1.21.5");
        assert!(region.contains(">vaA11bB22</a>"));
        assert!(region.contains("https://modrinth.com/mod/zeta/version/aA11bB22"));
    }

    #[test]
    fn test_mismatch_marker_only_when_versions_differ() {
        let row = ViewRow {
            name: "Zeta".to_string(),
            slug: "zeta".to_string(),
            version: "1.21.4".to_string(),
            file_id: 11,
            modrinth_slug: None,
            modrinth_version: None,
        };
        let stale = render_row(Category::Mods, &row, "1.21.5");
        assert!(stale.contains("mod-version mismatch"));

        let mut fresh_row = row.clone();
        fresh_row.version = "1.21.5".to_string();
        let fresh = render_row(Category::Mods, &fresh_row, "1.21.5");
        assert!(!fresh.contains("mismatch"));
    }

    #[test]
    fn test_render_page_is_idempotent() {
        let c = catalog();
        let first = render_page(&c, &[], "1.21.5", "2026-01-01 00:00:00");
        let again = render_page(&c, &[], "1.21.5", "2026-01-01 00:00:00");
        assert_eq!(first, again);

        // Rendering another version in between must not leak state
        let _ = render_page(&c, &[], "1.20", "2026-01-01 00:00:00");
        let back = render_page(&c, &[], "1.21.5", "2026-01-01 00:00:00");
        assert_eq!(first, back);
    }

    #[test]
    fn test_render_page_regions_and_banner() {
        let mut c = catalog();
        c.banners
            .insert("1.21.5".to_string(), "spring.png".to_string());
        let page = render_page(&c, &[], "1.21.5", "now");
        assert!(page.contains("id=\"fabric-mods\""));
        assert!(page.contains("id=\"resource-packs\""));
        assert!(page.contains("id=\"shader-packs\""));
        assert!(page.contains("background-image: url(./img/spring.png)"));

        // No banner entry for 1.20: fall back
        let page = render_page(&c, &[], "1.20", "now");
        assert!(page.contains("background-image: url(./img/banner.png)"));
    }

    #[test]
    fn test_unknown_version_renders_empty_regions() {
        let page = render_page(&catalog(), &[], "1.22", "now");
        assert!(page.contains("id=\"fabric-mods\""));
        assert!(!page.contains("mod-row"));
    }

    #[test]
    fn test_additional_links_section() {
        let groups = vec![LinkGroup {
            name: "Server <info>".to_string(),
            links: vec![
                LinkRef {
                    title: "Map".to_string(),
                    url: "https://example.com/map".to_string(),
                },
                LinkRef {
                    title: "Wiki".to_string(),
                    url: "https://example.com/wiki".to_string(),
                },
            ],
        }];
        let page = render_page(&catalog(), &groups, "1.21.5", "now");
        assert!(page.contains("id=\"additional-links\""));
        assert!(page.contains("Server &lt;info&gt;"));
        assert!(page.contains(">Map</a><br><a"));

        // Section is omitted entirely when there are no groups
        let page = render_page(&catalog(), &[], "1.21.5", "now");
        assert!(!page.contains("additional-links"));
    }

    #[test]
    fn test_version_nav_marks_current() {
        let page = render_page(&catalog(), &[], "1.21.5", "now");
        assert!(page.contains("class=\"version-link current\" href=\"mods-1.21.5.html\""));
    }
}
