//! Link detail panel
//!
//! Shows the outbound links constructed for the selected row, the same
//! URLs the published page carries.

use crate::action::Action;
use crate::component::Component;
use crate::model::links::{ext_links, file_links};
use crate::model::view::ViewRow;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct LinkDetail {
    row: Option<ViewRow>,
    selected_version: String,
}

impl LinkDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_row(&mut self, row: Option<ViewRow>, selected_version: String) {
        self.row = row;
        self.selected_version = selected_version;
    }

    fn link_line(label: &'static str, url: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:10}", label),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(url, Style::default().fg(Color::Blue)),
        ])
    }
}

impl Component for LinkDetail {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut lines = Vec::new();

        match &self.row {
            Some(row) => {
                let links = file_links(&row.slug, row.file_id, &self.selected_version);
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {} ", row.name),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(row.version.clone(), Style::default().fg(Color::DarkGray)),
                ]));
                lines.push(Self::link_line("List", links.list));
                lines.push(Self::link_line("File", links.file));
                lines.push(Self::link_line("Download", links.download));
                if let (Some(slug), Some(id)) = (&row.modrinth_slug, &row.modrinth_version) {
                    let ext = ext_links(slug, id, &self.selected_version);
                    lines.push(Self::link_line("Modrinth", ext.version));
                }
            }
            None => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "  No row selected",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Links (o to open file page) ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}
