use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, List, ListItem, Paragraph,
    },
    Frame,
};
use tracing::debug;

use crate::catalog;
use crate::logistics::{efficiency_band, route_overlays, RouteBounds, RouteOverlay};
use crate::models::{Alert, Delivery, DeliveryStatus, Marker, Route, Rgb, StatCard};
use crate::selector::OptionSelector;
use crate::ui::components::{
    efficiency_color, percent_bar, render_header, render_stat_cards, severity_color, ACCENT,
};
use crate::ui::view::{View, ViewAction};

pub struct LogisticsView {
    routes: Vec<Route>,
    depot: Marker,
    deliveries: Vec<Delivery>,
    alerts: Vec<Alert>,
    stats: Vec<StatCard>,
    route: OptionSelector,
}

impl LogisticsView {
    pub fn new() -> Self {
        let routes = catalog::routes();
        let route = OptionSelector::new("route", routes.iter().map(|r| r.id.to_string()));
        Self {
            routes,
            depot: catalog::distribution_center(),
            deliveries: catalog::deliveries(),
            alerts: catalog::logistics_alerts(),
            stats: catalog::logistics_stats(),
            route,
        }
    }

    pub fn selected_route(&self) -> Option<&Route> {
        self.routes.get(self.route.selected_index())
    }

    pub fn route_selector(&self) -> &OptionSelector {
        &self.route
    }

    /// What the map draws for the current selection
    pub fn overlays(&self) -> Vec<RouteOverlay> {
        route_overlays(&self.routes, self.route.selected_index())
    }

    fn render_routes(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .routes
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let selected = i == self.route.selected_index();
                let name_style = if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(if selected { "▶ " } else { "  " }),
                        Span::styled(route.name, name_style),
                        Span::styled(format!("  [{}]", route.status.label()), Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(vec![
                        Span::raw(format!("  {} • {} • fuel {} • ", route.distance, route.duration, route.fuel)),
                        Span::styled(
                            format!("{}% efficient", route.efficiency),
                            Style::default().fg(efficiency_color(efficiency_band(route.efficiency))),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "  {} stops • traffic {} • weather {} • saves {}",
                            route.stops, route.traffic, route.weather, route.savings
                        ),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Optimized Routes (↑/↓)"));
        f.render_widget(list, area);
    }

    fn render_map(&self, f: &mut Frame, area: Rect) {
        let overlays = self.overlays();
        let all_points: Vec<(f64, f64)> = overlays.iter().flat_map(|o| o.coordinates.iter().copied()).collect();
        let bounds = match RouteBounds::of(&all_points) {
            Some(bounds) => bounds.padded(0.1),
            None => return,
        };

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Route Map"))
            .marker(symbols::Marker::Braille)
            .x_bounds([bounds.min_lon, bounds.max_lon])
            .y_bounds([bounds.min_lat, bounds.max_lat])
            .paint(|ctx| {
                // Selected route last so it sits on top
                for overlay in overlays.iter().filter(|o| !o.selected).chain(overlays.iter().filter(|o| o.selected)) {
                    let color = faded(overlay.color, overlay.opacity);
                    for segment in overlay.coordinates.windows(2) {
                        let ((lat1, lon1), (lat2, lon2)) = (segment[0], segment[1]);
                        ctx.draw(&CanvasLine {
                            x1: lon1,
                            y1: lat1,
                            x2: lon2,
                            y2: lat2,
                            color,
                        });
                    }
                }
                ctx.layer();

                let (depot_lat, depot_lon) = self.depot.position;
                ctx.print(
                    depot_lon,
                    depot_lat,
                    Span::styled(format!("● {}", self.depot.title), Style::default().fg(Color::White)),
                );
                if let Some(popup) = overlays.iter().find_map(|o| o.popup.as_ref()) {
                    ctx.print(
                        bounds.min_lon,
                        bounds.min_lat,
                        Span::styled(popup.replace('\n', " | "), Style::default().fg(Color::Yellow)),
                    );
                }
            });

        f.render_widget(canvas, area);
    }

    fn render_alerts(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .alerts
            .iter()
            .map(|alert| {
                ListItem::new(Line::from(vec![
                    Span::styled("⚠ ", Style::default().fg(severity_color(alert.severity))),
                    Span::raw(alert.message),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Weather & Traffic Alerts"));
        f.render_widget(list, area);
    }

    fn render_deliveries(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .deliveries
            .iter()
            .map(|delivery| {
                let status_color = match delivery.status {
                    DeliveryStatus::InTransit => Color::Blue,
                    DeliveryStatus::Loading => Color::Yellow,
                    DeliveryStatus::Delivered => Color::Green,
                };
                Line::from(vec![
                    Span::styled(format!("{:<7}", delivery.id), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!("{:<12}", delivery.driver)),
                    Span::styled(format!("{:<11}", delivery.status.label()), Style::default().fg(status_color)),
                    Span::styled(percent_bar(delivery.progress, 10), Style::default().fg(ACCENT)),
                    Span::raw(format!(" {:>3}% ", delivery.progress)),
                    Span::styled(
                        format!("ETA {} • {}", delivery.eta, delivery.location),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Active Deliveries"));
        f.render_widget(paragraph, area);
    }
}

impl Default for LogisticsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Blend an overlay colour toward black by `opacity`
fn faded(color: Rgb, opacity: f32) -> Color {
    let scale = |c: u8| (c as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(scale(color.0), scale(color.1), scale(color.2))
}

impl View for LogisticsView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(6),
            ])
            .split(area);

        render_header(f, rows[0], "Smart Logistics", "AI-optimized routes with live traffic and weather");
        render_stat_cards(f, rows[1], &self.stats);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(middle[0]);

        self.render_routes(f, left[0]);
        self.render_alerts(f, left[1]);
        self.render_map(f, middle[1]);
        self.render_deliveries(f, rows[3]);
    }

    fn status(&self) -> String {
        match self.selected_route() {
            Some(route) => format!("{} • {} • {}", route.name, route.distance, route.duration),
            None => "No routes".to_string(),
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<ViewAction> {
        match key {
            KeyCode::Down => self.route.next(),
            KeyCode::Up => self.route.previous(),
            _ => return Ok(ViewAction::None),
        }
        if let Some(route) = self.selected_route() {
            debug!("Selected {}", route.name);
        }
        Ok(ViewAction::None)
    }
}
