//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    /// Banner / header strip across the top
    pub header: Rect,
    /// The three category regions, left to right
    pub regions: [Rect; 3],
    /// Link detail panel for the selected row
    pub detail: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the main screen layout
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header / banner
            Constraint::Min(5),    // Category regions
            Constraint::Length(7), // Link detail
            Constraint::Length(1), // Status
            Constraint::Length(3), // Help bar
        ])
        .split(area);

    let region_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(main_chunks[1]);

    MainLayout {
        header: main_chunks[0],
        regions: [region_chunks[0], region_chunks[1], region_chunks[2]],
        detail: main_chunks[2],
        status: main_chunks[3],
        help: main_chunks[4],
    }
}
