use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Sparkline, Tabs},
    Frame,
};

use crate::catalog;
use crate::models::{Alert, CurrentWeather, DailyForecast, Farm, HourlyForecast, Sky, SoilReading};
use crate::selector::OptionSelector;
use crate::ui::components::{render_header, severity_color, ACCENT};
use crate::ui::view::{View, ViewAction};

/// Forecasts for the selected farm. Every farm shows the same sample data.
pub struct WeatherView {
    farms: Vec<Farm>,
    farm: OptionSelector,
    current: CurrentWeather,
    hourly: Vec<HourlyForecast>,
    weekly: Vec<DailyForecast>,
    soil: Vec<SoilReading>,
    alerts: Vec<Alert>,
}

impl WeatherView {
    pub fn new() -> Self {
        let farms = catalog::farms();
        let farm = OptionSelector::new("farm", farms.iter().map(|f| f.id));
        Self {
            farms,
            farm,
            current: catalog::current_weather(),
            hourly: catalog::hourly_forecast(),
            weekly: catalog::weekly_forecast(),
            soil: catalog::soil_moisture(),
            alerts: catalog::weather_alerts(),
        }
    }

    pub fn farm_selector(&self) -> &OptionSelector {
        &self.farm
    }

    pub fn selected_farm(&self) -> Option<&Farm> {
        self.farms.get(self.farm.selected_index())
    }

    fn render_current(&self, f: &mut Frame, area: Rect) {
        let w = &self.current;
        let location = self.selected_farm().map(|farm| farm.location).unwrap_or_default();
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("⛅ {}°F", w.temp),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} • {}", w.condition, location)),
            Line::from(""),
            Line::from(format!("Humidity       {}%", w.humidity)),
            Line::from(format!("Wind           {} mph", w.wind_speed)),
            Line::from(format!("Precipitation  {}%", w.precipitation)),
            Line::from(format!("UV Index       {}", w.uv_index)),
        ])
        .block(Block::default().borders(Borders::ALL).title("Current Conditions"));
        f.render_widget(paragraph, area);
    }

    fn render_hourly(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .hourly
            .iter()
            .map(|h| {
                Line::from(vec![
                    Span::styled(format!("{:<6}", h.time), Style::default().fg(Color::Gray)),
                    Span::raw(format!("{:>3}°F ", h.temp)),
                    Span::styled(format!("☂ {}%", h.rain), Style::default().fg(Color::Blue)),
                ])
            })
            .collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Hourly"));
        f.render_widget(paragraph, area);
    }

    fn render_weekly(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .weekly
            .iter()
            .map(|d| {
                Line::from(vec![
                    Span::styled(format!("{:<4}", d.day), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!("{} ", sky_icon(d.sky))),
                    Span::styled(format!("{:>3}°", d.high), Style::default().fg(Color::Red)),
                    Span::raw(" / "),
                    Span::styled(format!("{:>3}°", d.low), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("  ☂ {}%", d.rain), Style::default().fg(Color::Blue)),
                ])
            })
            .collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("7-Day Forecast"));
        f.render_widget(paragraph, area);
    }

    fn render_soil(&self, f: &mut Frame, area: Rect) {
        let data: Vec<u64> = self.soil.iter().map(|r| r.moisture as u64).collect();
        let (first, last) = match (self.soil.first(), self.soil.last()) {
            (Some(first), Some(last)) => (first.hour, last.hour),
            _ => ("", ""),
        };
        let sparkline = Sparkline::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Soil Moisture % ({} - {})", first, last)),
            )
            .data(&data)
            .max(100)
            .style(Style::default().fg(Color::Blue));
        f.render_widget(sparkline, area);
    }

    fn render_alerts(&self, f: &mut Frame, area: Rect) {
        let mut items: Vec<ListItem> = self
            .alerts
            .iter()
            .map(|alert| {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(severity_color(alert.severity))),
                    Span::raw(alert.message),
                    Span::styled(
                        alert.time.map(|t| format!("  {}", t)).unwrap_or_default(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(Span::styled(
            "AI Recommendations",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))));
        items.extend(
            catalog::weather_recommendations()
                .iter()
                .map(|r| ListItem::new(format!("✓ {}", r))),
        );

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Alerts"));
        f.render_widget(list, area);
    }
}

impl Default for WeatherView {
    fn default() -> Self {
        Self::new()
    }
}

fn sky_icon(sky: Sky) -> &'static str {
    match sky {
        Sky::Sun => "☀",
        Sky::Cloud => "☁",
        Sky::CloudRain => "🌧",
    }
}

impl View for WeatherView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(11),
                Constraint::Min(0),
            ])
            .split(area);

        render_header(f, rows[0], "Weather Intelligence", "Hyper-local forecasts and crop alerts");

        let titles: Vec<&str> = self.farms.iter().map(|farm| farm.name).collect();
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("Farm (←/→)"))
            .highlight_style(Style::default().fg(Color::Black).bg(ACCENT))
            .select(self.farm.selected_index());
        f.render_widget(tabs, rows[1]);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(28),
                Constraint::Percentage(38),
            ])
            .split(rows[2]);
        self.render_current(f, top[0]);
        self.render_hourly(f, top[1]);
        self.render_weekly(f, top[2]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[3]);
        self.render_soil(f, bottom[0]);
        self.render_alerts(f, bottom[1]);
    }

    fn status(&self) -> String {
        match self.selected_farm() {
            Some(farm) => format!("{} • {}", farm.name, farm.location),
            None => "No farms".to_string(),
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<ViewAction> {
        match key {
            KeyCode::Right => self.farm.next(),
            KeyCode::Left => self.farm.previous(),
            _ => {}
        }
        Ok(ViewAction::None)
    }
}
