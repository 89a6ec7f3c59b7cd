//! Home component - Main application screen
//!
//! Displays the banner header, the three category regions, the link detail
//! panel, and the status/help bars. Owns focus and per-region selection
//! state. The regions are redrawn in full from the catalog snapshot on
//! every frame; nothing is patched incrementally.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::domain::DomainState;
use crate::model::ui::Tab;
use crate::model::view::{project, sort_by_name, ViewRow};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Home component for the main application view
///
/// Owns which region has focus and the selection inside each region.
pub struct HomeComponent {
    /// Focused category region
    pub active_tab: Tab,

    /// Selection state per region, indexed by `Tab::index`
    list_states: [ListState; 3],
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Mods,
            list_states: [
                ListState::default(),
                ListState::default(),
                ListState::default(),
            ],
        }
    }

    /// The rows one region displays: the catalog projected to the selected
    /// version, sorted by name.
    pub fn rows(domain: &DomainState, tab: Tab) -> Vec<ViewRow> {
        let Some(catalog) = &domain.catalog else {
            return Vec::new();
        };
        let mut rows = project(catalog, tab.category(), &domain.selected_version);
        sort_by_name(&mut rows);
        rows
    }

    pub fn list_state_mut(&mut self, tab: Tab) -> &mut ListState {
        &mut self.list_states[tab.index()]
    }

    /// The selected row of the focused region
    pub fn selected_row(&self, domain: &DomainState) -> Option<ViewRow> {
        let rows = Self::rows(domain, self.active_tab);
        let index = self.list_states[self.active_tab.index()].selected()?;
        rows.get(index).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, domain: &DomainState) {
        let len = Self::rows(domain, self.active_tab).len();
        if len == 0 {
            return;
        }
        let state = self.list_state_mut(self.active_tab);
        let next = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0, // Wrap to first
            None => 0,
        };
        state.select(Some(next));
    }

    pub fn previous(&mut self, domain: &DomainState) {
        let len = Self::rows(domain, self.active_tab).len();
        if len == 0 {
            return;
        }
        let state = self.list_state_mut(self.active_tab);
        let prev = match state.selected() {
            Some(0) | None => len - 1, // Wrap to last
            Some(i) => i - 1,
        };
        state.select(Some(prev));
    }

    pub fn select_first(&mut self, domain: &DomainState) {
        let len = Self::rows(domain, self.active_tab).len();
        let state = self.list_state_mut(self.active_tab);
        state.select(if len == 0 { None } else { Some(0) });
    }

    pub fn select_last(&mut self, domain: &DomainState) {
        let len = Self::rows(domain, self.active_tab).len();
        if len > 0 {
            self.list_state_mut(self.active_tab).select(Some(len - 1));
        }
    }

    pub fn next_tab(&mut self, domain: &DomainState) {
        let tabs = Tab::all();
        let next = (self.active_tab.index() + 1) % tabs.len();
        self.active_tab = tabs[next];
        self.ensure_selection(domain);
    }

    pub fn previous_tab(&mut self, domain: &DomainState) {
        let tabs = Tab::all();
        let prev = (self.active_tab.index() + tabs.len() - 1) % tabs.len();
        self.active_tab = tabs[prev];
        self.ensure_selection(domain);
    }

    /// Clamp every region's selection to its row count; run after the
    /// version changes or the catalog is reloaded so no region points past
    /// its new end.
    pub fn reset_for_version_change(&mut self, domain: &DomainState) {
        for tab in Tab::all() {
            let len = Self::rows(domain, tab).len();
            let state = self.list_state_mut(tab);
            if len == 0 {
                state.select(None);
            } else {
                state.select(Some(0));
            }
        }
    }

    fn ensure_selection(&mut self, domain: &DomainState) {
        let len = Self::rows(domain, self.active_tab).len();
        let state = self.list_state_mut(self.active_tab);
        match state.selected() {
            None if len > 0 => state.select(Some(0)),
            Some(i) if i >= len => state.select(if len == 0 { None } else { Some(len - 1) }),
            _ => {}
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Tab | KeyCode::Right => Some(Action::NextTab),
            KeyCode::BackTab | KeyCode::Left => Some(Action::PrevTab),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Dialogs
            KeyCode::Char('v') | KeyCode::Enter => Some(Action::OpenVersionSelector),
            KeyCode::Char('h') => Some(Action::OpenHistory),
            KeyCode::Char('a') => Some(Action::OpenExtraLinks),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            // Catalog / output
            KeyCode::Char('r') => Some(Action::ReloadCatalog),
            KeyCode::Char('e') => Some(Action::ExportSite),
            KeyCode::Char('c') => Some(Action::ExportCsv),
            KeyCode::Char('o') => Some(Action::OpenRowLink),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Updates are handled by App which has access to the domain state
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub domain: &'a DomainState,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    detail: &mut crate::components::LinkDetail,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_header(frame, layout.header, ctx);
    for (i, tab) in Tab::all().into_iter().enumerate() {
        render_region(frame, layout.regions[i], home, ctx, tab);
    }

    detail.set_row(
        home.selected_row(ctx.domain),
        ctx.domain.selected_version.clone(),
    );
    detail.draw(frame, layout.detail)?;

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let domain = ctx.domain;
    let banner = domain
        .catalog
        .as_ref()
        .map(|c| c.banner_for(&domain.selected_version))
        .unwrap_or("-");

    let lines = vec![
        Line::from(vec![
            Span::styled("Version: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                domain.selected_version.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Banner: ", Style::default().fg(Color::DarkGray)),
            Span::styled(banner.to_string(), Style::default().fg(Color::Magenta)),
        ]),
        Line::from(Span::styled(
            domain
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "no catalog loaded".to_string()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Mod List ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

/// Pad a string to a display width, truncating with an ellipsis when it is
/// too wide for its column.
fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        let mut padded = text.to_string();
        padded.push_str(&" ".repeat(width - text_width));
        return padded;
    }

    let mut truncated = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if used + w + 1 > width {
            break;
        }
        truncated.push(c);
        used += w;
    }
    truncated.push('…');
    used += 1;
    truncated.push_str(&" ".repeat(width.saturating_sub(used)));
    truncated
}

fn render_region(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
    tab: Tab,
) {
    let rows = HomeComponent::rows(ctx.domain, tab);
    let focused = home.active_tab == tab;
    let selected_version = ctx.domain.selected_version.as_str();

    // Name column takes what the version column leaves over
    let version_width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.version.as_str()))
        .max()
        .unwrap_or(0)
        .max(4);
    let inner_width = area.width.saturating_sub(4) as usize;
    let name_width = inner_width.saturating_sub(version_width + 3).max(8);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            // Stale rows (file version behind the browsed version) get the
            // warning color, same as the published page
            let version_style = if row.version == selected_version {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Red)
            };
            let badge = if row.modrinth_slug.is_some() {
                Span::styled("◆ ", Style::default().fg(Color::Green))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                badge,
                Span::styled(
                    pad_to_width(&row.name, name_width),
                    Style::default().fg(Color::White),
                ),
                Span::raw(" "),
                Span::styled(row.version.clone(), version_style),
            ]))
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", tab.name(), rows.len()))
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(if focused { "▶ " } else { "  " });

    frame.render_stateful_widget(list, area, home.list_state_mut(tab));
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let spans = if let Some(error) = ctx.error {
        vec![Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        )]
    } else if let Some(status) = ctx.status_message {
        vec![Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        )]
    } else {
        let counts: Vec<String> = Tab::all()
            .into_iter()
            .map(|tab| {
                format!(
                    "{} {}",
                    HomeComponent::rows(ctx.domain, tab).len(),
                    tab.name().to_lowercase()
                )
            })
            .collect();
        vec![Span::styled(
            format!(" {} ", counts.join(" · ")),
            Style::default().fg(Color::DarkGray),
        )]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str| {
        Span::styled(
            format!(" {} ", k),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };
    let spans = vec![
        key("v"),
        Span::raw("Version "),
        key("j/k"),
        Span::raw("Rows "),
        key("Tab"),
        Span::raw("Region "),
        key("o"),
        Span::raw("Open "),
        key("e"),
        Span::raw("Export "),
        key("c"),
        Span::raw("CSV "),
        key("r"),
        Span::raw("Reload "),
        key("h"),
        Span::raw("History "),
        key("a"),
        Span::raw("Links "),
        key("?"),
        Span::raw("Help "),
        key("q"),
        Span::raw("Quit"),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Catalog, Entity, FileRecord};

    fn domain() -> DomainState {
        let catalog = Catalog {
            mod_list: vec![
                Entity {
                    name: "Zeta".to_string(),
                    curseforge: "zeta".to_string(),
                    modrinth: None,
                    files: vec![FileRecord {
                        version: "1.21.5".to_string(),
                        cf: 1,
                        mr: None,
                    }],
                },
                Entity {
                    name: "alpha".to_string(),
                    curseforge: "alpha".to_string(),
                    modrinth: None,
                    files: vec![FileRecord {
                        version: "1.21.5".to_string(),
                        cf: 2,
                        mr: None,
                    }],
                },
            ],
            ..Default::default()
        };
        let mut domain = DomainState::new();
        domain.catalog = Some(catalog);
        domain.selected_version = "1.21.5".to_string();
        domain
    }

    #[test]
    fn test_rows_are_sorted_for_display() {
        let names: Vec<String> = HomeComponent::rows(&domain(), Tab::Mods)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["alpha", "Zeta"]);
    }

    #[test]
    fn test_navigation_wraps() {
        let domain = domain();
        let mut home = HomeComponent::new();
        home.reset_for_version_change(&domain);
        assert_eq!(home.list_state_mut(Tab::Mods).selected(), Some(0));

        home.next(&domain);
        assert_eq!(home.list_state_mut(Tab::Mods).selected(), Some(1));
        home.next(&domain);
        assert_eq!(home.list_state_mut(Tab::Mods).selected(), Some(0));
        home.previous(&domain);
        assert_eq!(home.list_state_mut(Tab::Mods).selected(), Some(1));
    }

    #[test]
    fn test_selected_row_follows_focus() {
        let domain = domain();
        let mut home = HomeComponent::new();
        home.reset_for_version_change(&domain);
        assert_eq!(home.selected_row(&domain).unwrap().name, "alpha");

        // Resource packs region is empty: no selection there
        home.next_tab(&domain);
        assert!(home.selected_row(&domain).is_none());
    }

    #[test]
    fn test_empty_region_selects_nothing() {
        let mut domain = domain();
        domain.selected_version = "1.8".to_string();
        let mut home = HomeComponent::new();
        home.reset_for_version_change(&domain);
        assert_eq!(home.list_state_mut(Tab::Mods).selected(), None);
        home.next(&domain);
        assert!(home.selected_row(&domain).is_none());
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
        assert_eq!(pad_to_width("abcdef", 5), "abcd…");
        assert_eq!(pad_to_width("abcde", 5), "abcde");
    }
}
