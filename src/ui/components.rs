/// Shared widgets and colour helpers for the HarvestFlow views
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::logistics::EfficiencyBand;
use crate::models::{ActivityStatus, GradeTier, Rgb, Severity, StatCard, Trend};

/// Brand accent
pub const ACCENT: Color = Color::Rgb(0x10, 0xb9, 0x81);

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

pub fn tier_color(tier: GradeTier) -> Color {
    match tier {
        GradeTier::Premium => Color::Green,
        GradeTier::Standard => Color::Cyan,
        GradeTier::Low => Color::Red,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
    }
}

pub fn activity_color(status: ActivityStatus) -> Color {
    match status {
        ActivityStatus::Success => Color::Green,
        ActivityStatus::Warning => Color::Yellow,
        ActivityStatus::Info => Color::Blue,
    }
}

pub fn efficiency_color(band: EfficiencyBand) -> Color {
    match band {
        EfficiencyBand::High => Color::Green,
        EfficiencyBand::Medium => Color::Blue,
        EfficiencyBand::Low => Color::Red,
    }
}

/// Render a section heading with its tagline
pub fn render_header(f: &mut Frame, area: Rect, title: &str, tagline: &str) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tagline.to_string(), Style::default().fg(Color::Gray))),
    ]);

    f.render_widget(header, area);
}

/// Render a row of stat cards, evenly split across `area`
pub fn render_stat_cards(f: &mut Frame, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let mut value_line = vec![Span::styled(
            card.value,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )];
        if let Some(change) = card.change {
            value_line.push(Span::raw("  "));
            value_line.push(styled_trend(change, card.trend));
        }

        let paragraph = Paragraph::new(vec![
            Line::from(value_line),
            Line::from(Span::styled(card.label, Style::default().fg(Color::Gray))),
        ])
        .block(Block::default().borders(Borders::ALL));

        f.render_widget(paragraph, *chunk);
    }
}

/// Change indicator coloured by trend direction
pub fn styled_trend(change: &str, trend: Trend) -> Span<'static> {
    match trend {
        Trend::Up => Span::styled(format!("▲ {}", change), Style::default().fg(Color::Green)),
        Trend::Down => Span::styled(format!("▼ {}", change), Style::default().fg(Color::Red)),
        Trend::Flat => Span::raw(change.to_string()),
    }
}

/// Render a progress bar
pub fn render_progress_bar(f: &mut Frame, area: Rect, progress: f64, label: &str, color: Color) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(label.to_string()))
        .gauge_style(Style::default().fg(color))
        .ratio(progress.clamp(0.0, 1.0));

    f.render_widget(gauge, area);
}

/// Render error message
pub fn render_error(f: &mut Frame, area: Rect, title: &str, error: &str) {
    let error_paragraph = Paragraph::new(error.to_string())
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .style(Style::default().fg(Color::Red));

    f.render_widget(error_paragraph, area);
}

/// Format large numbers with a unit suffix
pub fn format_large_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Horizontal bar of `width` cells filled to `percent`
pub fn percent_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
