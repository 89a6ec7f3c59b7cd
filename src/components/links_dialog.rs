//! Additional links overlay component
//!
//! Shows the version-independent link groups from the secondary document.

use crate::action::Action;
use crate::component::Component;
use crate::model::extra::LinkGroup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct ExtraLinksDialog {
    pub scroll_offset: usize,
}

impl ExtraLinksDialog {
    pub fn draw_with_groups(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        groups: &[LinkGroup],
    ) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 3;
        let overlay_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let mut lines: Vec<Line> = Vec::new();
        if groups.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  No additional links document loaded",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for group in groups {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", group.name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for link in &group.links {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("    {:16}", link.title),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(link.url.clone(), Style::default().fg(Color::Blue)),
                ]));
            }
        }

        let visible_height = overlay_area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Additional Links (Esc to close) ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, overlay_area);
        Ok(())
    }
}

impl Component for ExtraLinksDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('a') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_with_groups which takes the groups
        Ok(())
    }
}
