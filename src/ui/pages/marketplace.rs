use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};
use tracing::debug;

use crate::catalog;
use crate::marketplace::MarketplaceFilter;
use crate::models::{Product, StatCard};
use crate::ui::components::{render_header, render_stat_cards, tier_color, ACCENT};
use crate::ui::view::{View, ViewAction};

pub struct MarketplaceView {
    products: Vec<Product>,
    stats: Vec<StatCard>,
    filter: MarketplaceFilter,
    search_mode: bool,
}

impl MarketplaceView {
    pub fn new() -> Self {
        Self {
            products: catalog::products(),
            stats: catalog::marketplace_stats(),
            filter: MarketplaceFilter::new(),
            search_mode: false,
        }
    }

    pub fn filter(&self) -> &MarketplaceFilter {
        &self.filter
    }

    pub fn is_searching(&self) -> bool {
        self.search_mode
    }

    /// Products matching the current category and search text
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.products)
    }

    fn render_filters(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let titles: Vec<String> = self
            .filter
            .categories()
            .options()
            .iter()
            .map(|c| capitalize(c))
            .collect();
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("Category (←/→)"))
            .highlight_style(Style::default().fg(Color::Black).bg(ACCENT))
            .select(self.filter.categories().selected_index());
        f.render_widget(tabs, chunks[0]);

        let (search_text, border) = if self.search_mode {
            (format!("🔍 {}▏", self.filter.search()), Style::default().fg(Color::Yellow))
        } else if self.filter.search().is_empty() {
            ("Press / to search products or sellers".to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (format!("🔍 {}", self.filter.search()), Style::default())
        };
        let search = Paragraph::new(search_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Search"),
        );
        f.render_widget(search, chunks[1]);
    }

    fn render_products(&self, f: &mut Frame, area: Rect) {
        let visible = self.visible_products();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Products ({})", visible.len()));

        if visible.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No products found", Style::default().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(
                    "Try adjusting your filters or search query",
                    Style::default().fg(Color::Gray),
                )),
            ])
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec!["Product", "Grade", "Price", "Seller", "Location", "Rating", "Stock"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows = visible.iter().map(|product| {
            let name = if product.trending {
                format!("{} 📈", product.name)
            } else {
                product.name.clone()
            };
            Row::new(vec![
                Cell::from(name),
                Cell::from(product.grade.to_string()).style(Style::default().fg(tier_color(product.grade.tier()))),
                Cell::from(format!("${:.2}/{}", product.price, product.unit)).style(Style::default().fg(ACCENT)),
                Cell::from(product.seller.clone()),
                Cell::from(product.location.clone()),
                Cell::from(format!("★ {:.1}", product.rating)),
                Cell::from(format!("{} {}", product.stock, product.unit)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(22),
                Constraint::Length(6),
                Constraint::Length(12),
                Constraint::Percentage(20),
                Constraint::Percentage(14),
                Constraint::Length(7),
                Constraint::Length(11),
            ],
        )
        .header(header)
        .block(block);

        f.render_widget(table, area);
    }
}

impl Default for MarketplaceView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for MarketplaceView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(4), // Stats
                Constraint::Length(3), // Filters
                Constraint::Min(0),    // Products
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            "Live Marketplace",
            "Buy and sell quality-verified produce directly from trusted farms",
        );
        render_stat_cards(f, chunks[1], &self.stats);
        self.render_filters(f, chunks[2]);
        self.render_products(f, chunks[3]);
    }

    fn status(&self) -> String {
        if self.search_mode {
            "Type to search • Enter/Esc done • Backspace delete".to_string()
        } else {
            format!(
                "Category: {} • {} products • / search • c clear search",
                self.filter.category(),
                self.visible_products().len()
            )
        }
    }

    fn captures_input(&self) -> bool {
        self.search_mode
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<ViewAction> {
        if self.search_mode {
            match key {
                KeyCode::Char(c) => self.filter.push_char(c),
                KeyCode::Backspace => self.filter.pop_char(),
                KeyCode::Enter | KeyCode::Esc => {
                    self.search_mode = false;
                    debug!("Marketplace search set to '{}'", self.filter.search());
                }
                _ => {}
            }
            return Ok(ViewAction::None);
        }

        match key {
            KeyCode::Right => self.filter.next_category(),
            KeyCode::Left => self.filter.previous_category(),
            KeyCode::Char('/') => self.search_mode = true,
            KeyCode::Char('c') => self.filter.clear_search(),
            _ => {}
        }
        Ok(ViewAction::None)
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
