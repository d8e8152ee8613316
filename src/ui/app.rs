use crossterm::event::KeyCode;
use ratatui::Frame;
use std::sync::Arc;
use tracing::{info, warn};

use crate::analysis::{AnalysisState, QualityGrader, SimulatedGrader};
use crate::models::{Config, Section};
use crate::ui::layout::TuiLayout;
use crate::ui::pages::{DashboardView, HomeView, LogisticsView, MarketplaceView, QualityView, WeatherView};
use crate::ui::router::ViewRouter;
use crate::ui::state::{LogLevel, StatusLog};
use crate::ui::view::{View, ViewAction};

/// Top-level controller: owns the router, every view and the status log
pub struct HarvestApp {
    router: ViewRouter,
    home: HomeView,
    marketplace: MarketplaceView,
    logistics: LogisticsView,
    weather: WeatherView,
    quality: QualityView,
    dashboard: DashboardView,
    status_log: StatusLog,
    should_quit: bool,
}

impl HarvestApp {
    /// Create the app with the simulated grader configured by `config`
    pub fn new(config: &Config) -> Self {
        Self::with_grader(config, Arc::new(SimulatedGrader::new(config.analysis_delay)))
    }

    pub fn with_grader(config: &Config, grader: Arc<dyn QualityGrader>) -> Self {
        let mut status_log = StatusLog::new();
        status_log.push(LogLevel::Info, "🌱 Welcome to HarvestFlow");

        Self {
            router: ViewRouter::with_section(config.start_section),
            home: HomeView::new(),
            marketplace: MarketplaceView::new(),
            logistics: LogisticsView::new(),
            weather: WeatherView::new(),
            quality: QualityView::new(grader),
            dashboard: DashboardView::new(),
            status_log,
            should_quit: false,
        }
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn marketplace(&self) -> &MarketplaceView {
        &self.marketplace
    }

    pub fn quality(&self) -> &QualityView {
        &self.quality
    }

    pub fn status_log(&self) -> &StatusLog {
        &self.status_log
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch sections and record it in the status log
    pub fn navigate(&mut self, section: Section) {
        if self.router.current() == section {
            return;
        }
        self.router.navigate(section);
        info!("📍 Switched to {}", section.label());
        self.status_log
            .push(LogLevel::Info, format!("Switched to {}", section.label()));
    }

    fn current_view(&self) -> &dyn View {
        match self.router.current() {
            Section::Home => &self.home,
            Section::Marketplace => &self.marketplace,
            Section::Logistics => &self.logistics,
            Section::Weather => &self.weather,
            Section::Quality => &self.quality,
            Section::Dashboard => &self.dashboard,
        }
    }

    fn current_view_mut(&mut self) -> &mut dyn View {
        match self.router.current() {
            Section::Home => &mut self.home,
            Section::Marketplace => &mut self.marketplace,
            Section::Logistics => &mut self.logistics,
            Section::Weather => &mut self.weather,
            Section::Quality => &mut self.quality,
            Section::Dashboard => &mut self.dashboard,
        }
    }

    /// Handle a key press. Global shortcuts apply unless the current view is
    /// collecting text; view errors are reported in the status log.
    pub fn handle_key(&mut self, key: KeyCode) {
        if !self.current_view().captures_input() {
            match key {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.quit();
                    return;
                }
                KeyCode::Char(c @ '1'..='6') => {
                    let index = c as usize - '1' as usize;
                    self.navigate(Section::ALL[index]);
                    return;
                }
                KeyCode::Tab => {
                    self.navigate(self.router.current().next());
                    return;
                }
                KeyCode::BackTab => {
                    self.navigate(self.router.current().previous());
                    return;
                }
                _ => {}
            }
        }

        match self.current_view_mut().handle_key(key) {
            Ok(ViewAction::None) => {}
            Ok(ViewAction::Navigate(section)) => self.navigate(section),
            Ok(ViewAction::Quit) => self.quit(),
            Err(e) => self.report_error(e),
        }
    }

    /// Periodic update. The quality view is drained on every tick so an
    /// analysis finishes even while another section is shown.
    pub fn tick(&mut self) {
        let was_pending = self.quality.simulator().state().is_pending();

        if let Err(e) = self.quality.update() {
            self.report_error(e);
        }
        if self.router.current() != Section::Quality {
            if let Err(e) = self.current_view_mut().update() {
                self.report_error(e);
            }
        }

        if was_pending {
            match self.quality.simulator().state() {
                AnalysisState::Complete { result, .. } => self.status_log.push(
                    LogLevel::Success,
                    format!("✅ Analysis complete: grade {} ({}/100)", result.grade, result.score),
                ),
                AnalysisState::Failed { message, .. } => self
                    .status_log
                    .push(LogLevel::Error, format!("❌ {}", message)),
                _ => {}
            }
        }
    }

    fn report_error(&mut self, e: anyhow::Error) {
        warn!("❌ {}", e);
        self.status_log.push(LogLevel::Error, format!("❌ {}", e));
    }

    /// Draw the tab bar, the current view and the status bar
    pub fn draw(&self, f: &mut Frame) {
        let layout = TuiLayout::new(f.area());
        let view = self.current_view();

        layout.render_tab_bar(f, self.router.current());
        view.render(f, layout.content);
        layout.render_status_bar(f, &view.status(), self.status_log.latest());
    }
}
