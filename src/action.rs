//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next row in the focused region
    NextItem,
    /// Move to previous row in the focused region
    PrevItem,
    /// Focus the next category region
    NextTab,
    /// Focus the previous category region
    PrevTab,
    /// Jump to first row
    FirstItem,
    /// Jump to last row
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the version selection dialog
    OpenVersionSelector,
    /// Open export history overlay
    OpenHistory,
    /// Open the additional-links overlay
    OpenExtraLinks,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Navigate up in modal
    ModalUp,
    /// Navigate down in modal
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch the browsed game version
    SetVersion(String),
    /// Reload the catalog document from disk
    ReloadCatalog,

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────
    /// Render the static site into the export directory
    ExportSite,
    /// Write the current version's rows as CSV
    ExportCsv,
    /// Open the selected row's file page in the browser
    OpenRowLink,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenVersionSelector => write!(f, "OpenVersionSelector"),
            Action::OpenHistory => write!(f, "OpenHistory"),
            Action::OpenExtraLinks => write!(f, "OpenExtraLinks"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::SetVersion(v) => write!(f, "SetVersion({})", v),
            Action::ReloadCatalog => write!(f, "ReloadCatalog"),
            Action::ExportSite => write!(f, "ExportSite"),
            Action::ExportCsv => write!(f, "ExportCsv"),
            Action::OpenRowLink => write!(f, "OpenRowLink"),
        }
    }
}
