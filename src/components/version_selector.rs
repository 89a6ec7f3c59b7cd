//! Version selector dialog component
//!
//! Two-panel layout:
//! - Left panel: the known game versions
//! - Right panel: what the highlighted version offers (row counts, banner)

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Summary of one selectable version, shown in the right panel
#[derive(Debug, Clone, Default)]
pub struct VersionEntry {
    pub name: String,
    pub mods: usize,
    pub resources: usize,
    pub shaders: usize,
    pub banner: String,
}

/// Version selector dialog
pub struct VersionSelectorDialog {
    pub selected_index: usize,
    pub versions: Vec<VersionEntry>,
    pub current_version: String,
    pub list_state: ListState,
}

impl Default for VersionSelectorDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSelectorDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            versions: Vec::new(),
            current_version: String::new(),
            list_state,
        }
    }

    /// Set the selectable versions, highlighting the one being browsed
    pub fn set_versions(&mut self, current: &str, versions: Vec<VersionEntry>) {
        self.current_version = current.to_string();
        self.versions = versions;

        self.selected_index = self
            .versions
            .iter()
            .position(|v| v.name == current)
            .unwrap_or(0);
        self.list_state.select(if self.versions.is_empty() {
            None
        } else {
            Some(self.selected_index)
        });
    }

    /// Get the currently highlighted version name
    pub fn get_selected_version(&self) -> &str {
        self.versions
            .get(self.selected_index)
            .map(|v| v.name.as_str())
            .unwrap_or(&self.current_version)
    }

    fn select_next(&mut self) {
        if self.versions.is_empty() {
            return;
        }
        if self.selected_index < self.versions.len() - 1 {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for VersionSelectorDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('v') => Some(Action::CloseModal),
            KeyCode::Enter if !self.versions.is_empty() => Some(Action::ConfirmModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = (c as usize) - ('1' as usize);
                if index < self.versions.len() {
                    self.selected_index = index;
                    self.list_state.select(Some(index));
                    Some(Action::ConfirmModal)
                } else {
                    None
                }
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let popup_width = 60u16.min(area.width.saturating_sub(4));
        let popup_height = 18u16.min(area.height.saturating_sub(4));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Content (two panels)
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header_text = if self.versions.is_empty() {
            "No versions in catalog".to_string()
        } else {
            format!("Browsing: {}", self.current_version)
        };
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            if self.versions.is_empty() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Cyan)
            },
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select Version ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(20)])
            .split(main_chunks[1]);

        // Left panel: version list
        let items: Vec<ListItem> = self
            .versions
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_current = entry.name == self.current_version;
                let prefix = if is_current { "● " } else { "  " };
                let shortcut = if i < 9 {
                    format!("[{}] ", i + 1)
                } else {
                    "    ".to_string()
                };

                ListItem::new(Line::from(vec![
                    Span::styled(shortcut, Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        prefix,
                        Style::default().fg(if is_current {
                            Color::Green
                        } else {
                            Color::DarkGray
                        }),
                    ),
                    Span::raw(entry.name.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Versions ")
                    .title_style(Style::default().fg(Color::Cyan))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, content_chunks[0], &mut self.list_state);

        // Right panel: what the highlighted version offers
        let detail_lines: Vec<Line> = match self.versions.get(self.selected_index) {
            Some(entry) => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Mods:           ", Style::default().fg(Color::Cyan)),
                    Span::styled(entry.mods.to_string(), Style::default().fg(Color::Yellow)),
                ]),
                Line::from(vec![
                    Span::styled("  Resource packs: ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        entry.resources.to_string(),
                        Style::default().fg(Color::Yellow),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("  Shader packs:   ", Style::default().fg(Color::Cyan)),
                    Span::styled(entry.shaders.to_string(), Style::default().fg(Color::Yellow)),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Banner:         ", Style::default().fg(Color::Cyan)),
                    Span::styled(entry.banner.clone(), Style::default().fg(Color::Magenta)),
                ]),
            ],
            None => vec![Line::from(Span::styled(
                "  No version selected",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let detail = Paragraph::new(detail_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Available ")
                .title_style(Style::default().fg(Color::Cyan))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(detail, content_chunks[1]);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<VersionEntry> {
        names
            .iter()
            .map(|n| VersionEntry {
                name: n.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_set_versions_preselects_current() {
        let mut dialog = VersionSelectorDialog::new();
        dialog.set_versions("1.21.5", entries(&["1.20", "1.21.5", "1.21.10"]));
        assert_eq!(dialog.selected_index, 1);
        assert_eq!(dialog.get_selected_version(), "1.21.5");
    }

    #[test]
    fn test_unknown_current_falls_back_to_first() {
        let mut dialog = VersionSelectorDialog::new();
        dialog.set_versions("2.0", entries(&["1.20", "1.21.5"]));
        assert_eq!(dialog.get_selected_version(), "1.20");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut dialog = VersionSelectorDialog::new();
        dialog.set_versions("1.20", entries(&["1.20", "1.21.5"]));
        dialog.select_prev();
        assert_eq!(dialog.selected_index, 0);
        dialog.select_next();
        dialog.select_next();
        assert_eq!(dialog.selected_index, 1);
    }
}
