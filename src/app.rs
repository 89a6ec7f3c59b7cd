//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App coordinates between components; the data shaping lives
//! in the model and services layers.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, ExtraLinksDialog, HelpDialog, HistoryDialog, HomeComponent,
    HomeRenderContext, LinkDetail, QuitDialog, VersionEntry, VersionSelectorDialog,
};
use crate::config::Config;
use crate::model::domain::DomainState;
use crate::model::history::{ExportHistory, ExportHistoryEntry};
use crate::model::links::file_links;
use crate::model::modal::{Modal, ModalStack};
use crate::model::view::{project, Category};
use crate::model::Catalog;
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Main application state - coordinates between components
pub struct App {
    /// Domain state (catalog snapshot, selected version, paths)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Current config (for resolving paths and the export directory)
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub detail: LinkDetail,
    pub quit_dialog: QuitDialog,
    pub version_selector: VersionSelectorDialog,
    pub history_dialog: HistoryDialog,
    pub links_dialog: ExtraLinksDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    /// Create a new App, loading the catalog and (optionally) the
    /// additional-links document.
    ///
    /// `catalog_override` is the positional CLI argument; it wins over the
    /// configured path.
    pub fn new(config: Config, catalog_override: Option<PathBuf>) -> App {
        let mut app = App {
            domain: DomainState::new(),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            config: config.clone(),
            home: HomeComponent::new(),
            detail: LinkDetail::new(),
            quit_dialog: QuitDialog,
            version_selector: VersionSelectorDialog::new(),
            history_dialog: HistoryDialog::default(),
            links_dialog: ExtraLinksDialog::default(),
            help_dialog: HelpDialog::default(),
        };

        app.domain.export_dir = PathBuf::from(&config.export_dir);
        app.domain.catalog_path =
            Some(catalog_override.unwrap_or_else(|| PathBuf::from(&config.catalog_path)));
        if !config.links_path.is_empty() {
            app.domain.links_path = Some(PathBuf::from(&config.links_path));
        }
        app.domain.export_history = ExportHistory::load();

        app.load_catalog_from_disk(true);
        app.load_links_from_disk();
        app
    }

    /// Load (or reload) the catalog document. On failure the previous
    /// snapshot stays in place and the message goes to the log and the
    /// status bar.
    fn load_catalog_from_disk(&mut self, initial: bool) {
        let Some(path) = self.domain.catalog_path.clone() else {
            self.error = Some("No catalog path configured".to_string());
            return;
        };

        match services::load_catalog(&path) {
            Ok(catalog) => {
                self.error = None;
                self.domain.selected_version = self.resolve_version(&catalog, initial);
                info!(
                    "loaded catalog from {} ({} versions)",
                    path.display(),
                    catalog.versions().len()
                );
                self.domain.catalog = Some(catalog);
                self.home.reset_for_version_change(&self.domain);
                if !initial {
                    self.status_message = Some("Catalog reloaded".to_string());
                }
            }
            Err(e) => {
                error!("{}", e);
                self.error = Some(e);
            }
        }
    }

    /// Pick the version to browse after a (re)load: keep the current one if
    /// the catalog still offers it, fall back to the configured default,
    /// then to the latest.
    fn resolve_version(&self, catalog: &Catalog, initial: bool) -> String {
        let versions = catalog.versions();
        let current = &self.domain.selected_version;
        if !initial && versions.iter().any(|v| v == current) {
            return current.clone();
        }
        if !self.config.default_version.is_empty()
            && versions.iter().any(|v| *v == self.config.default_version)
        {
            return self.config.default_version.clone();
        }
        catalog.latest_version().unwrap_or_default()
    }

    /// The additional-links document is optional: a missing file is normal,
    /// a malformed one is worth a warning but never blocks the catalog.
    fn load_links_from_disk(&mut self) {
        let Some(path) = self.domain.links_path.clone() else {
            return;
        };
        if !path.exists() {
            info!("no additional-links document at {}", path.display());
            return;
        }
        match services::load_additional_links(&path) {
            Ok(groups) => {
                info!("loaded {} link groups from {}", groups.len(), path.display());
                self.domain.extra_links = groups;
            }
            Err(e) => warn!("{}", e),
        }
    }

    fn set_version(&mut self, version: String) {
        info!("switching to version {}", version);
        self.domain.selected_version = version;
        self.home.reset_for_version_change(&self.domain);
        self.status_message = None;
    }

    fn export_site(&mut self) {
        let Some(catalog) = &self.domain.catalog else {
            self.error = Some("Nothing to export: no catalog loaded".to_string());
            return;
        };

        let out_dir = self.domain.export_dir.clone();
        match services::export_site(
            catalog,
            &self.domain.extra_links,
            &out_dir,
            &self.domain.selected_version,
        ) {
            Ok(summary) => {
                self.status_message = Some(format!(
                    "Exported {} pages ({} rows) to {}",
                    summary.pages.len(),
                    summary.rows,
                    out_dir.display()
                ));
                let entry = ExportHistoryEntry {
                    timestamp: Local::now(),
                    default_version: summary.default_version,
                    pages: summary.pages.len(),
                    rows: summary.rows,
                    out_dir: out_dir.display().to_string(),
                };
                self.domain.export_history.insert(0, entry);
                if self.domain.export_history.len() > 100 {
                    self.domain.export_history.truncate(100);
                }
                if let Err(e) = ExportHistory::save(&self.domain.export_history) {
                    warn!("{}", e);
                }
            }
            Err(e) => {
                error!("{}", e);
                self.error = Some(e);
            }
        }
    }

    fn export_csv(&mut self) {
        let Some(catalog) = &self.domain.catalog else {
            self.error = Some("Nothing to export: no catalog loaded".to_string());
            return;
        };

        let version = self.domain.selected_version.clone();
        let path = self
            .domain
            .export_dir
            .join(format!("catalog-{}.csv", version));
        match services::export_csv(catalog, &version, &path) {
            Ok(rows) => {
                self.status_message = Some(format!("Wrote {} rows to {}", rows, path.display()));
            }
            Err(e) => {
                error!("{}", e);
                self.error = Some(e);
            }
        }
    }

    fn open_selected_link(&mut self) {
        let Some(row) = self.home.selected_row(&self.domain) else {
            return;
        };
        let url = file_links(&row.slug, row.file_id, &self.domain.selected_version).file;
        match services::open_url(&url) {
            Ok(()) => self.status_message = Some(format!("Opened {}", url)),
            Err(e) => {
                warn!("{}", e);
                self.error = Some(e);
            }
        }
    }

    fn open_version_selector(&mut self) {
        let entries = self
            .domain
            .catalog
            .as_ref()
            .map(version_entries)
            .unwrap_or_default();
        self.version_selector
            .set_versions(&self.domain.selected_version, entries);
        self.modals.push(Modal::VersionSelector {
            selected_index: self.version_selector.selected_index,
        });
    }

    /// Handle key events when startup failed and there is nothing to show
    fn handle_error_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('r') => Ok(Some(Action::ReloadCatalog)),
            KeyCode::Char('q') | KeyCode::Esc => Ok(Some(Action::ForceQuit)),
            _ => Ok(None),
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::VersionSelector { .. } => self.version_selector.handle_key_event(key),
            Modal::History { .. } => self.history_dialog.handle_key_event(key),
            Modal::ExtraLinks { .. } => self.links_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::VersionSelector { .. } => self.version_selector.draw(frame, area),
            Modal::History { .. } => {
                self.history_dialog
                    .draw_with_history(frame, area, &self.domain.export_history)
            }
            Modal::ExtraLinks { .. } => {
                self.links_dialog
                    .draw_with_groups(frame, area, &self.domain.extra_links)
            }
            Modal::Help { .. } => self.help_dialog.draw(frame, area),
        }
    }
}

/// Per-version summaries for the selector's right panel
fn version_entries(catalog: &Catalog) -> Vec<VersionEntry> {
    catalog
        .versions()
        .into_iter()
        .map(|version| {
            let mods = project(catalog, Category::Mods, &version).len();
            let resources = project(catalog, Category::ResourcePacks, &version).len();
            let shaders = project(catalog, Category::ShaderPacks, &version).len();
            let banner = catalog.banner_for(&version).to_string();
            VersionEntry {
                name: version,
                mods,
                resources,
                shaders,
                banner,
            }
        })
        .collect()
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Startup failure with nothing loaded: only reload and quit make sense
        if self.error.is_some() && self.domain.catalog.is_none() && self.modals.is_empty() {
            return self.handle_error_key_event(key);
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.home.next(&self.domain),
            Action::PrevItem => self.home.previous(&self.domain),
            Action::NextTab => self.home.next_tab(&self.domain),
            Action::PrevTab => self.home.previous_tab(&self.domain),
            Action::FirstItem => self.home.select_first(&self.domain),
            Action::LastItem => self.home.select_last(&self.domain),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenVersionSelector => {
                self.open_version_selector();
            }
            Action::OpenHistory => {
                self.history_dialog.reset();
                self.modals.push(Modal::History { selected_index: 0 });
            }
            Action::OpenExtraLinks => {
                self.links_dialog.scroll_offset = 0;
                self.modals.push(Modal::ExtraLinks { scroll_offset: 0 });
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(modal) = self.modals.top().cloned() {
                    if let Modal::VersionSelector { .. } = modal {
                        let version = self.version_selector.get_selected_version().to_string();
                        self.modals.pop();
                        return Ok(Some(Action::SetVersion(version)));
                    }
                }
            }
            Action::ModalUp => {
                if let Some(Modal::VersionSelector { selected_index }) = self.modals.top_mut() {
                    *selected_index = self.version_selector.selected_index;
                } else if matches!(self.modals.top(), Some(Modal::History { .. })) {
                    self.history_dialog.update(Action::ModalUp)?;
                    if let Some(Modal::History { selected_index }) = self.modals.top_mut() {
                        *selected_index = self.history_dialog.selected_index;
                    }
                }
            }
            Action::ModalDown => {
                if let Some(Modal::VersionSelector { selected_index }) = self.modals.top_mut() {
                    *selected_index = self.version_selector.selected_index;
                } else if matches!(self.modals.top(), Some(Modal::History { .. })) {
                    // Clamp before incrementing
                    let max = self.domain.export_history.len().saturating_sub(1);
                    if self.history_dialog.selected_index < max {
                        self.history_dialog.update(Action::ModalDown)?;
                    }
                    if let Some(Modal::History { selected_index }) = self.modals.top_mut() {
                        *selected_index = self.history_dialog.selected_index;
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Catalog
            // ─────────────────────────────────────────────────────────────────
            Action::SetVersion(version) => {
                self.set_version(version);
            }
            Action::ReloadCatalog => {
                self.load_catalog_from_disk(false);
                self.load_links_from_disk();
            }

            // ─────────────────────────────────────────────────────────────────
            // Output
            // ─────────────────────────────────────────────────────────────────
            Action::ExportSite => self.export_site(),
            Action::ExportCsv => self.export_csv(),
            Action::OpenRowLink => self.open_selected_link(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            domain: &self.domain,
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };
        draw_home_screen(frame, area, &mut self.home, &mut self.detail, &ctx)?;

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CATALOG_JSON: &str = r#"{
        "banners": {},
        "modList": [
            {
                "name": "Sodium",
                "curseforge": "sodium",
                "files": [
                    {"version": "1.20", "cf": 10},
                    {"version": "1.21.5", "cf": 11}
                ]
            }
        ],
        "resourcePacks": [],
        "shaderPacks": []
    }"#;

    fn app_with_catalog(contents: &str) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mods.json");
        fs::write(&path, contents).unwrap();
        let config = Config {
            catalog_path: path.display().to_string(),
            links_path: String::new(),
            default_version: String::new(),
            export_dir: dir.path().join("site").display().to_string(),
        };
        (App::new(config, None), dir)
    }

    #[test]
    fn test_startup_selects_latest_version() {
        let (app, _dir) = app_with_catalog(CATALOG_JSON);
        assert!(app.error.is_none());
        assert_eq!(app.domain.selected_version, "1.21.5");
    }

    #[test]
    fn test_startup_with_bad_catalog_reports_error() {
        let (app, _dir) = app_with_catalog("{ not json");
        assert!(app.domain.catalog.is_none());
        assert!(app.error.as_deref().unwrap().contains("Failed to parse"));
    }

    #[test]
    fn test_set_version_resets_selection() {
        let (mut app, _dir) = app_with_catalog(CATALOG_JSON);
        app.update(Action::SetVersion("1.20".to_string())).unwrap();
        assert_eq!(app.domain.selected_version, "1.20");
        assert_eq!(app.home.selected_row(&app.domain).unwrap().version, "1.20");
    }

    #[test]
    fn test_failed_reload_keeps_prior_snapshot() {
        let (mut app, _dir) = app_with_catalog(CATALOG_JSON);
        let path = app.domain.catalog_path.clone().unwrap();
        fs::write(&path, "{ broken").unwrap();

        app.update(Action::ReloadCatalog).unwrap();

        // The stale snapshot is still displayed; only the error is new
        assert!(app.domain.catalog.is_some());
        assert_eq!(app.domain.selected_version, "1.21.5");
        assert!(app.error.is_some());
    }

    #[test]
    fn test_version_selector_confirm_emits_set_version() {
        let (mut app, _dir) = app_with_catalog(CATALOG_JSON);
        app.update(Action::OpenVersionSelector).unwrap();
        assert!(matches!(
            app.modals.top(),
            Some(Modal::VersionSelector { .. })
        ));

        // Selector preselects the browsed version (1.21.5, index 1)
        assert_eq!(app.version_selector.get_selected_version(), "1.21.5");
        let follow_up = app.update(Action::ConfirmModal).unwrap();
        assert_eq!(follow_up, Some(Action::SetVersion("1.21.5".to_string())));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_export_site_records_history() {
        let (mut app, dir) = app_with_catalog(CATALOG_JSON);
        app.domain.export_history.clear();
        app.update(Action::ExportSite).unwrap();

        assert!(app.error.is_none());
        assert!(dir.path().join("site").join("index.html").exists());
        assert_eq!(app.domain.export_history.len(), 1);
        assert_eq!(app.domain.export_history[0].default_version, "1.21.5");
    }
}
