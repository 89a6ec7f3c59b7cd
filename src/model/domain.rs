//! Domain state - business/data state separate from UI concerns

use super::catalog::Catalog;
use super::extra::LinkGroup;
use super::history::ExportHistoryEntry;
use std::path::PathBuf;

/// Domain state containing all business data
///
/// The catalog is an immutable snapshot: the loader replaces it wholesale,
/// and everything downstream (projection, rendering, export) takes it by
/// shared reference together with an explicit version argument. There is no
/// ambient "current version" read from the UI.
#[derive(Default)]
pub struct DomainState {
    /// The loaded catalog snapshot, absent until the first successful load
    pub catalog: Option<Catalog>,

    /// Version-independent link groups from the secondary document
    pub extra_links: Vec<LinkGroup>,

    /// The version the user is browsing
    pub selected_version: String,

    /// Where the catalog was loaded from
    pub catalog_path: Option<PathBuf>,

    /// Where the additional-links document was loaded from, if present
    pub links_path: Option<PathBuf>,

    /// Destination directory for site exports
    pub export_dir: PathBuf,

    /// Past site exports, newest first
    pub export_history: Vec<ExportHistoryEntry>,
}

impl DomainState {
    pub fn new() -> Self {
        Self {
            catalog: None,
            extra_links: Vec::new(),
            selected_version: String::new(),
            catalog_path: None,
            links_path: None,
            export_dir: PathBuf::from("site"),
            export_history: Vec::new(),
        }
    }
}
