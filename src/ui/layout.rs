use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::models::Section;
use crate::ui::components::ACCENT;
use crate::ui::state::{LogLevel, LogMessage};

/// Centralized layout management to prevent conflicts between views
pub struct TuiLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl TuiLayout {
    /// Create a new layout from the given area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(4), // Status bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            content: chunks[1],
            status_bar: chunks[2],
        }
    }

    /// Render the navigation bar with `active` highlighted
    pub fn render_tab_bar(&self, f: &mut Frame, active: Section) {
        let titles: Vec<String> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| format!("{} {}", i + 1, section.label()))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled("🌱 HarvestFlow", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .select(active.index());

        f.render_widget(tabs, self.tab_bar);
    }

    /// Render key hints, the view status and the latest log message
    pub fn render_status_bar(&self, f: &mut Frame, view_status: &str, latest: Option<&LogMessage>) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("1-6", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(" jump • ", Style::default().fg(Color::Gray)),
                Span::styled("Tab", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(" next section • ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" to quit • ", Style::default().fg(Color::Gray)),
                Span::styled(view_status.to_string(), Style::default().fg(Color::Cyan)),
            ]),
        ];

        if let Some(message) = latest {
            let color = match message.level {
                LogLevel::Info => Color::White,
                LogLevel::Success => Color::Green,
                LogLevel::Warning => Color::Yellow,
                LogLevel::Error => Color::Red,
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", message.timestamp.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(message.message.clone(), Style::default().fg(color)),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));

        f.render_widget(paragraph, self.status_bar);
    }
}
