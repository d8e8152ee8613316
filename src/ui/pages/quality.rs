use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::debug;

use crate::analysis::{AnalysisSimulator, AnalysisState, ImageSource, QualityGrader};
use crate::catalog;
use crate::error::HarvestError;
use crate::models::{QualityResult, StatCard};
use crate::ui::components::{
    percent_bar, render_error, render_header, render_progress_bar, render_stat_cards, tier_color, ACCENT,
};
use crate::ui::view::{View, ViewAction};

/// AI grading page: pick an image, watch the analysis, read the result
pub struct QualityView {
    simulator: AnalysisSimulator,
    stats: Vec<StatCard>,
    /// Path being typed while the upload prompt is open
    path_input: Option<String>,
    /// Upload being read from disk in the background
    loading: Option<ImageLoad>,
}

struct ImageLoad {
    path: String,
    receiver: oneshot::Receiver<Result<ImageSource, HarvestError>>,
}

impl QualityView {
    pub fn new(grader: Arc<dyn QualityGrader>) -> Self {
        Self {
            simulator: AnalysisSimulator::new(grader),
            stats: catalog::quality_stats(),
            path_input: None,
            loading: None,
        }
    }

    pub fn simulator(&self) -> &AnalysisSimulator {
        &self.simulator
    }

    pub fn path_input(&self) -> Option<&str> {
        self.path_input.as_deref()
    }

    /// Whether an uploaded file is still being read
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Read `path` off the UI task; the result is picked up by `update`.
    ///
    /// Must be called from within a tokio runtime.
    fn start_loading(&mut self, path: String) {
        let (sender, receiver) = oneshot::channel();
        let task_path = path.clone();
        tokio::spawn(async move {
            let _ = sender.send(ImageSource::from_path(&task_path).await);
        });
        debug!("Loading image from {}", path);
        self.loading = Some(ImageLoad { path, receiver });
    }

    /// Hand a finished upload to the simulator
    fn poll_loading(&mut self) -> Result<()> {
        let received = match self.loading.as_mut() {
            Some(load) => load.receiver.try_recv(),
            None => return Ok(()),
        };

        match received {
            Err(TryRecvError::Empty) => Ok(()),
            Err(TryRecvError::Closed) => {
                let path = self.loading.take().map(|load| load.path).unwrap_or_default();
                anyhow::bail!("Loading {} was interrupted", path)
            }
            Ok(loaded) => {
                self.loading = None;
                self.simulator.select_image(loaded?);
                Ok(())
            }
        }
    }

    fn handle_prompt_key(&mut self, key: KeyCode) -> Result<ViewAction> {
        let Some(input) = self.path_input.as_mut() else {
            return Ok(ViewAction::None);
        };

        match key {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => self.path_input = None,
            KeyCode::Enter => {
                let path = input.trim().to_string();
                self.path_input = None;
                if !path.is_empty() {
                    self.start_loading(path);
                }
            }
            _ => {}
        }
        Ok(ViewAction::None)
    }

    fn render_upload(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Upload Crop Image");

        let loading = self.loading.as_ref().map(|load| load.path.as_str());
        let mut lines = match (loading, self.simulator.state().image()) {
            (Some(path), _) => vec![Line::from(Span::styled(
                format!("Loading {}...", path),
                Style::default().fg(Color::Yellow),
            ))],
            (None, Some(image)) => vec![
                Line::from(Span::styled("🖼  Image selected", Style::default().fg(ACCENT))),
                Line::from(image.describe()),
                Line::from(""),
                Line::from(Span::styled("x remove image", Style::default().fg(Color::Gray))),
            ],
            (None, None) => vec![
                Line::from(Span::styled(
                    "Upload crop image",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Any image file: PNG, JPG, WEBP...",
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("u", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                    Span::raw(" enter a file path   "),
                    Span::styled("s", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                    Span::raw(" try sample image"),
                ]),
            ],
        };

        if let Some(input) = &self.path_input {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Path: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{}▏", input)),
            ]));
            lines.push(Line::from(Span::styled(
                "Enter analyze • Esc cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        f.render_widget(paragraph, area);
    }

    fn render_analysis(&self, f: &mut Frame, area: Rect) {
        match self.simulator.state() {
            AnalysisState::Idle => {
                let ready = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled("Ready to Analyze", Style::default().add_modifier(Modifier::BOLD))),
                    Line::from(Span::styled(
                        "Upload an image to get instant AI-powered quality assessment",
                        Style::default().fg(Color::Gray),
                    )),
                ])
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Analysis"));
                f.render_widget(ready, area);
            }
            AnalysisState::Pending { .. } => self.render_pending(f, area),
            AnalysisState::Complete { result, .. } => render_result(f, area, result),
            AnalysisState::Failed { message, .. } => {
                render_error(f, area, "Analysis failed (r to retry)", message);
            }
        }
    }

    fn render_pending(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let progress = self.simulator.progress().unwrap_or(0.0);
        render_progress_bar(f, chunks[0], progress, "Analyzing Image...", ACCENT);

        let steps: Vec<Line> = self
            .simulator
            .revealed_steps()
            .iter()
            .map(|step| {
                Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(ACCENT)),
                    Span::raw(*step),
                ])
            })
            .collect();
        let paragraph = Paragraph::new(steps).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, chunks[1]);
    }
}

fn render_result(f: &mut Frame, area: Rect, result: &QualityResult) {
    let grade_style = Style::default()
        .fg(tier_color(result.grade.tier()))
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("Grade {}", result.grade), grade_style),
            Span::raw(format!("   Score {}/100   ", result.score)),
            Span::styled(result.quality.clone(), Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
        Line::from(format!(
            "Color {} • Size {} • Defects {}",
            result.color, result.size, result.defects
        )),
        Line::from(format!(
            "Ripeness {}% • Freshness {}% • Market value {}",
            result.ripeness, result.freshness, result.market_value
        )),
        Line::from(""),
        Line::from(Span::styled("Detailed Analysis", Style::default().add_modifier(Modifier::BOLD))),
    ];

    lines.extend(result.details.entries().iter().map(|(name, score)| {
        Line::from(vec![
            Span::raw(format!("{:<8}", name)),
            Span::styled(percent_bar(*score, 20), Style::default().fg(ACCENT)),
            Span::raw(format!(" {}%", score)),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "AI Recommendations",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        result
            .recommendations
            .iter()
            .map(|rec| Line::from(format!("• {}", rec))),
    );

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Analysis Result"));
    f.render_widget(paragraph, area);
}

impl View for QualityView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        render_header(
            f,
            rows[0],
            "AI Crop Quality Assessment",
            "Upload crop images for instant AI-powered quality grading and market value estimation",
        );
        render_stat_cards(f, rows[1], &self.stats);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[2]);
        self.render_upload(f, columns[0]);
        self.render_analysis(f, columns[1]);
    }

    fn status(&self) -> String {
        if self.path_input.is_some() {
            return "Type an image path • Enter analyze • Esc cancel".to_string();
        }
        if self.loading.is_some() {
            return "Reading image...".to_string();
        }
        match self.simulator.state() {
            AnalysisState::Idle => "u upload • s sample image".to_string(),
            AnalysisState::Pending { .. } => "Analyzing... • x cancel".to_string(),
            AnalysisState::Complete { .. } => "Analysis complete • u/s new image • x remove".to_string(),
            AnalysisState::Failed { .. } => "Analysis failed • r retry • x remove".to_string(),
        }
    }

    fn captures_input(&self) -> bool {
        self.path_input.is_some()
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<ViewAction> {
        if self.path_input.is_some() {
            return self.handle_prompt_key(key);
        }

        match key {
            KeyCode::Char('u') => self.path_input = Some(String::new()),
            KeyCode::Char('s') => {
                self.loading = None;
                self.simulator.select_image(ImageSource::sample());
            }
            KeyCode::Char('x') => {
                self.loading = None;
                self.simulator.remove_image();
            }
            KeyCode::Char('r') => self.simulator.retry()?,
            _ => {}
        }
        Ok(ViewAction::None)
    }

    fn update(&mut self) -> Result<()> {
        self.simulator.process_updates();
        self.poll_loading()
    }
}
