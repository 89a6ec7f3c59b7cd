//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Catalog` and friends - the loaded data document
//! - `ViewRow` / `project` - the per-version projection
//! - `DomainState` - business/data state
//! - `ModalStack` - modal overlay management

pub mod catalog;
pub mod domain;
pub mod extra;
pub mod history;
pub mod links;
pub mod modal;
pub mod ui;
pub mod version;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, Entity, FileRecord};
pub use extra::{AdditionalLinksDoc, LinkGroup, LinkRef};
pub use history::ExportHistoryEntry;
pub use view::{project, sort_by_name, Category, ViewRow};
