//! External interactions
//!
//! This module contains services touching the world outside the model:
//! - Catalog and additional-links loading
//! - Static page rendering and site/CSV export
//! - Opening links in the system browser

pub mod catalog;
pub mod export;
pub mod opener;
pub mod page;

pub use catalog::{load_additional_links, load_catalog};
pub use export::{export_csv, export_site, ExportSummary};
pub use opener::open_url;
pub use page::{page_file_name, render_page};
