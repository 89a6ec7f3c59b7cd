//! modlist-tui - a terminal browser and static-site publisher for a
//! per-version game mod catalog.
//!
//! It uses the Component Architecture pattern from ratatui: components turn
//! key events into Actions, the App processes Actions, and every frame is
//! drawn in full from the current state.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{anyhow, bail, Result};
use crossterm::event::Event;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(|s| s.as_str()) {
        Some("export") => return run_export(&args[1..]),
        Some("--help") | Some("-h") => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    logging::init();
    let config = Config::load().unwrap_or_default();
    let catalog_override = args.first().map(PathBuf::from);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new(config, catalog_override);

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("draw error: {}", e);
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // An action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}

/// Headless publishing: render the whole site and exit
fn run_export(args: &[String]) -> Result<()> {
    logging::init();
    let config = Config::load().unwrap_or_default();

    let mut catalog_path: Option<String> = None;
    let mut out_dir: Option<String> = None;
    let mut version: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" => {
                out_dir = Some(
                    iter.next()
                        .ok_or_else(|| anyhow!("--out requires a directory"))?
                        .clone(),
                );
            }
            "--version" => {
                version = Some(
                    iter.next()
                        .ok_or_else(|| anyhow!("--version requires a value"))?
                        .clone(),
                );
            }
            flag if flag.starts_with('-') => bail!("Unknown flag: {}", flag),
            _ => catalog_path = Some(arg.clone()),
        }
    }

    let catalog_path = catalog_path.unwrap_or_else(|| config.catalog_path.clone());
    let catalog = services::load_catalog(&catalog_path).map_err(|e| anyhow!(e))?;

    let extra_links = if !config.links_path.is_empty() && Path::new(&config.links_path).exists() {
        services::load_additional_links(&config.links_path).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            Vec::new()
        })
    } else {
        Vec::new()
    };

    let versions = catalog.versions();
    let default_version = version
        .or_else(|| {
            let configured = &config.default_version;
            if !configured.is_empty() && versions.iter().any(|v| v == configured) {
                Some(configured.clone())
            } else {
                None
            }
        })
        .or_else(|| versions.last().cloned())
        .ok_or_else(|| anyhow!("Catalog {} has no versions", catalog_path))?;

    let out_dir = out_dir.unwrap_or_else(|| config.export_dir.clone());
    let summary = services::export_site(
        &catalog,
        &extra_links,
        Path::new(&out_dir),
        &default_version,
    )
    .map_err(|e| anyhow!(e))?;

    println!(
        "Exported {} pages ({} rows) to {} (index: {})",
        summary.pages.len(),
        summary.rows,
        out_dir,
        summary.default_version
    );
    Ok(())
}

fn print_usage() {
    println!("modlist-tui - browse and publish a per-version mod catalog");
    println!();
    println!("Usage:");
    println!("  modlist-tui [CATALOG]                      open the browser");
    println!("  modlist-tui export [CATALOG] [--out DIR] [--version V]");
    println!();
    println!("CATALOG defaults to the configured path (~/.modlist-tui/config.json),");
    println!("falling back to ./mods.json.");
}
