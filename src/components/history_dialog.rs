//! Export history overlay component

use crate::action::Action;
use crate::component::Component;
use crate::model::history::ExportHistoryEntry;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// List of past site exports
#[derive(Default)]
pub struct HistoryDialog {
    pub selected_index: usize,
    pub list_state: ListState,
}

impl HistoryDialog {
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn draw_with_history(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        entries: &[ExportHistoryEntry],
    ) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 3;
        let overlay_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        if entries.is_empty() {
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No exports yet",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "  Press 'e' on the main screen to export the site",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(history_block());
            frame.render_widget(paragraph, overlay_area);
            return Ok(());
        }

        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.formatted_time()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        format!("v{} ", entry.default_version),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(format!("{} pages, {} rows ", entry.pages, entry.rows)),
                    Span::styled(
                        format!("→ {}", entry.out_dir),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(history_block())
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, overlay_area, &mut self.list_state);
        Ok(())
    }
}

fn history_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Export History (Esc to close) ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(Color::Magenta))
}

impl Component for HistoryDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ModalDown => {
                self.selected_index = self.selected_index.saturating_add(1);
                self.list_state.select(Some(self.selected_index));
            }
            Action::ModalUp => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.list_state.select(Some(self.selected_index));
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_with_history which takes the entries
        Ok(())
    }
}
