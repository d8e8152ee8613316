use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::catalog;
use crate::models::{Feature, Panel, Section, StatCard, ViewId};
use crate::ui::components::{render_stat_cards, ACCENT};
use crate::ui::view::{View, ViewAction};

/// Landing page: hero banner followed by the feature list
pub struct HomeView {
    features: Vec<Feature>,
    highlights: Vec<StatCard>,
    selected: usize,
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            features: catalog::features(),
            highlights: catalog::hero_highlights(),
            selected: 0,
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn selected_feature(&self) -> Option<&Feature> {
        self.features.get(self.selected)
    }

    fn render_hero(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(4)])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                "🌱 Next-Gen Agriculture Platform",
                Style::default().fg(ACCENT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Transform Your Harvest with AI-Powered Intelligence",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Revolutionize farming with real-time crop quality assessment, smart logistics, \
                 weather insights, and a seamless marketplace all in one platform.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[g]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(" Try AI Grading   "),
                Span::styled("[m]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(" Explore Marketplace"),
            ]),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));

        f.render_widget(hero, chunks[0]);
        render_stat_cards(f, chunks[1], &self.highlights);
    }

    fn render_features(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .features
            .iter()
            .enumerate()
            .map(|(i, feature)| {
                let (marker, title_style) = if i == self.selected {
                    ("▶ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                } else {
                    ("  ", Style::default().fg(ACCENT))
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(feature.title, title_style),
                        Span::styled(format!("  → {}", feature.target.label()), Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", feature.description),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Everything You Need to Succeed"),
        );
        f.render_widget(list, area);
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HomeView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let panels = ViewId::Home.panels();
        let constraints: Vec<Constraint> = panels
            .iter()
            .map(|panel| match panel {
                Panel::Hero => Constraint::Length(14),
                _ => Constraint::Min(0),
            })
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (panel, chunk) in panels.iter().zip(chunks.iter()) {
            match panel {
                Panel::Hero => self.render_hero(f, *chunk),
                Panel::Features => self.render_features(f, *chunk),
                _ => {}
            }
        }
    }

    fn status(&self) -> String {
        "↑/↓ choose a feature • Enter open • g AI Grading • m Marketplace".to_string()
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<ViewAction> {
        let action = match key {
            KeyCode::Char('g') => ViewAction::Navigate(Section::Quality),
            KeyCode::Char('m') => ViewAction::Navigate(Section::Marketplace),
            KeyCode::Up | KeyCode::Down if self.features.is_empty() => ViewAction::None,
            KeyCode::Up => {
                self.selected = self.selected.checked_sub(1).unwrap_or(self.features.len() - 1);
                ViewAction::None
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % self.features.len();
                ViewAction::None
            }
            KeyCode::Enter => match self.selected_feature() {
                Some(feature) => ViewAction::Navigate(feature.target),
                None => ViewAction::None,
            },
            _ => ViewAction::None,
        };
        Ok(action)
    }
}
