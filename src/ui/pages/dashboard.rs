use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::catalog;
use crate::models::{Activity, CropShare, MonthlyRevenue, StatCard, YieldPoint};
use crate::ui::components::{
    activity_color, format_large_number, percent_bar, render_header, render_stat_cards, rgb, ACCENT,
};
use crate::ui::view::View;

/// Farm analytics overview. Read-only.
pub struct DashboardView {
    stats: Vec<StatCard>,
    revenue: Vec<MonthlyRevenue>,
    crops: Vec<CropShare>,
    yields: Vec<YieldPoint>,
    activity: Vec<Activity>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            stats: catalog::dashboard_stats(),
            revenue: catalog::monthly_revenue(),
            crops: catalog::crop_distribution(),
            yields: catalog::yield_data(),
            activity: catalog::recent_activity(),
        }
    }

    fn render_revenue(&self, f: &mut Frame, area: Rect) {
        // Bars are in thousands of dollars
        let data: Vec<(&str, u64)> = self
            .revenue
            .iter()
            .map(|m| (m.month, m.revenue / 1_000))
            .collect();
        let total_costs: u64 = self.revenue.iter().map(|m| m.costs).sum();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Revenue ($K) • costs ${}",
                format_large_number(total_costs as f64)
            )))
            .data(data.as_slice())
            .bar_width(5)
            .bar_gap(2)
            .bar_style(Style::default().fg(ACCENT))
            .value_style(Style::default().fg(Color::Black).bg(ACCENT));
        f.render_widget(chart, area);
    }

    fn render_yields(&self, f: &mut Frame, area: Rect) {
        let header = Row::new(vec!["Week", "Actual", "Predicted", "Δ"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let rows = self.yields.iter().map(|y| {
            let delta = y.actual as i64 - y.predicted as i64;
            let delta_color = if delta >= 0 { Color::Green } else { Color::Red };
            Row::new(vec![
                Cell::from(y.week),
                Cell::from(format!("{} lbs", y.actual)),
                Cell::from(format!("{} lbs", y.predicted)),
                Cell::from(format!("{:+}", delta)).style(Style::default().fg(delta_color)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Yield: Actual vs Predicted"));
        f.render_widget(table, area);
    }

    fn render_crops(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .crops
            .iter()
            .map(|crop| {
                Line::from(vec![
                    Span::raw(format!("{:<9}", crop.name)),
                    Span::styled(percent_bar(crop.value, 15), Style::default().fg(rgb(crop.color))),
                    Span::raw(format!(" {}%", crop.value)),
                ])
            })
            .collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Crop Distribution"));
        f.render_widget(paragraph, area);
    }

    fn render_activity(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .activity
            .iter()
            .map(|a| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(activity_color(a.status))),
                    Span::raw(a.message),
                    Span::styled(format!("  {}", a.time), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Recent Activity"));
        f.render_widget(paragraph, area);
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for DashboardView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(7),
            ])
            .split(area);

        render_header(f, rows[0], "Farm Dashboard", "Revenue, yield and crop performance at a glance");
        render_stat_cards(f, rows[1], &self.stats);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[2]);
        self.render_revenue(f, middle[0]);
        self.render_yields(f, middle[1]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[3]);
        self.render_crops(f, bottom[0]);
        self.render_activity(f, bottom[1]);
    }

    fn status(&self) -> String {
        let total: u64 = self.revenue.iter().map(|m| m.revenue).sum();
        format!("Revenue to date ${}", format_large_number(total as f64))
    }
}
