//! Top-level controller and rendering tests

use async_trait::async_trait;
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

use crate::common::render::{render_app, screen_contains};
use crate::common::{logging, test_data};
use harvest_flow::analysis::{AnalysisState, ImageSource, QualityGrader};
use harvest_flow::error::HarvestError;
use harvest_flow::models::{Config, QualityResult, Section};
use harvest_flow::ui::state::LogLevel;
use harvest_flow::ui::HarvestApp;

fn test_config() -> Config {
    Config {
        analysis_delay: Duration::from_millis(3000),
        ..Config::default()
    }
}

/// Grader whose backend is always unreachable
struct OfflineGrader;

#[async_trait]
impl QualityGrader for OfflineGrader {
    async fn grade(&self, _image: &ImageSource) -> Result<QualityResult, HarvestError> {
        Err(HarvestError::AnalysisFailed("inference service unreachable".to_string()))
    }
}

fn type_text(app: &mut HarvestApp, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

/// Tick until the background file read has been handed over
async fn finish_loading(app: &mut HarvestApp) {
    for _ in 0..500 {
        if !app.quality().is_loading() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
        app.tick();
    }
    panic!("image load never finished");
}

#[test_log::test]
fn test_starts_on_configured_section() {
    let config = Config {
        start_section: Section::Weather,
        ..Config::default()
    };
    let app = HarvestApp::new(&config);
    assert_eq!(app.router().current(), Section::Weather);
}

#[test_log::test]
fn test_home_call_to_action_keys() {
    let mut app = HarvestApp::new(&test_config());

    app.handle_key(KeyCode::Char('g'));
    assert_eq!(app.router().current(), Section::Quality);

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('m'));
    assert_eq!(app.router().current(), Section::Marketplace);

    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.router().current(), Section::Logistics);
}

#[test_log::test]
fn test_navigation_is_logged_once_per_change() {
    let mut app = HarvestApp::new(&test_config());
    let before = app.status_log().len();

    app.handle_key(KeyCode::Char('6'));
    app.handle_key(KeyCode::Char('6'));

    assert_eq!(app.status_log().len(), before + 1);
    assert_eq!(app.status_log().latest().unwrap().message, "Switched to Dashboard");
}

#[test_log::test]
fn test_quit_keys() {
    let mut app = HarvestApp::new(&test_config());
    assert!(!app.should_quit());
    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit());
}

#[test_log::test]
fn test_search_mode_swallows_global_shortcuts() {
    logging::init_test_logging();
    logging::log_test_step("Typing digits and q into the marketplace search");
    let mut app = HarvestApp::new(&test_config());
    app.handle_key(KeyCode::Char('2'));
    app.handle_key(KeyCode::Char('/'));

    type_text(&mut app, "q3");
    assert!(!app.should_quit());
    assert_eq!(app.router().current(), Section::Marketplace);
    assert_eq!(app.marketplace().filter().search(), "q3");

    app.handle_key(KeyCode::Esc);
    assert!(!app.should_quit());
    assert!(!app.marketplace().is_searching());

    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test_log::test]
fn test_marketplace_renders_filtered_products() {
    let mut app = HarvestApp::new(&test_config());
    app.handle_key(KeyCode::Char('2'));
    app.handle_key(KeyCode::Right);
    app.handle_key(KeyCode::Right);
    assert_eq!(app.marketplace().filter().category(), "fruits");

    let screen = render_app(&app, 160, 50);
    assert!(screen_contains(&screen, "Premium Apples"));
    assert!(screen_contains(&screen, "Organic Strawberries"));
    assert!(!screen_contains(&screen, "Wheat Grain"));
    assert!(screen_contains(&screen, "Products (2)"));

    app.handle_key(KeyCode::Char('/'));
    type_text(&mut app, "durian");
    app.handle_key(KeyCode::Enter);
    let screen = render_app(&app, 160, 50);
    assert!(screen_contains(&screen, "No products found"));
}

#[test_log::test]
fn test_every_section_renders() {
    let mut app = HarvestApp::new(&test_config());
    let expected = [
        (Section::Home, "Everything You Need to Succeed"),
        (Section::Marketplace, "Live Marketplace"),
        (Section::Logistics, "Optimized Routes"),
        (Section::Weather, "7-Day Forecast"),
        (Section::Quality, "Ready to Analyze"),
        (Section::Dashboard, "Recent Activity"),
    ];

    for (section, marker) in expected {
        app.navigate(section);
        let screen = render_app(&app, 160, 60);
        assert!(screen_contains(&screen, "HarvestFlow"), "tab bar missing on {}", section);
        assert!(screen_contains(&screen, marker), "{} should show '{}'", section, marker);
    }
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_quality_upload_flow() {
    let file = test_data::create_temp_image(test_data::PNG_BYTES);
    let path = file.path().to_string_lossy().into_owned();

    let mut app = HarvestApp::new(&test_config());
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('u'));
    type_text(&mut app, &path);
    assert_eq!(app.quality().path_input(), Some(path.as_str()));
    app.handle_key(KeyCode::Enter);
    assert!(app.quality().is_loading());
    assert!(app.quality().simulator().state().is_idle());

    finish_loading(&mut app).await;
    assert!(app.quality().simulator().state().is_pending());
    let screen = render_app(&app, 160, 50);
    assert!(screen_contains(&screen, "Analyzing Image..."));

    // Paused clock: the grading task finishes while this sleeps
    tokio::time::sleep(Duration::from_millis(3001)).await;
    app.tick();

    assert_eq!(app.status_log().latest().unwrap().level, LogLevel::Success);
    let screen = render_app(&app, 160, 50);
    assert!(screen_contains(&screen, "Grade A+"));
    assert!(screen_contains(&screen, "Score 96/100"));

    app.handle_key(KeyCode::Char('x'));
    assert_eq!(app.quality().simulator().state(), &AnalysisState::Idle);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_tick_applies_finished_analysis() {
    let mut app = HarvestApp::new(&test_config());
    app.navigate(Section::Quality);
    app.handle_key(KeyCode::Char('s'));
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }

    tokio::time::advance(Duration::from_millis(3001)).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    app.tick();

    assert!(app.quality().simulator().state().result().is_some());
}

#[test_log::test(tokio::test)]
async fn test_missing_upload_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.jpg");

    let mut app = HarvestApp::new(&test_config());
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('u'));
    type_text(&mut app, &missing.to_string_lossy());
    app.handle_key(KeyCode::Enter);
    finish_loading(&mut app).await;

    assert!(!app.should_quit());
    assert!(app.quality().simulator().state().is_idle());
    let latest = app.status_log().latest().unwrap();
    assert_eq!(latest.level, LogLevel::Error);
    assert!(latest.message.contains("Failed to read image"));
}

#[test_log::test]
fn test_retry_without_failure_is_reported() {
    let mut app = HarvestApp::new(&test_config());
    app.navigate(Section::Quality);
    app.handle_key(KeyCode::Char('r'));

    let latest = app.status_log().latest().unwrap();
    assert_eq!(latest.level, LogLevel::Error);
    assert!(latest.message.contains("Cannot retry while analysis is idle"));
}

#[test_log::test(tokio::test)]
async fn test_failed_analysis_is_shown_and_logged() {
    let mut app = HarvestApp::with_grader(&test_config(), Arc::new(OfflineGrader));
    app.navigate(Section::Quality);
    app.handle_key(KeyCode::Char('s'));
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    app.tick();

    let latest = app.status_log().latest().unwrap();
    assert_eq!(latest.level, LogLevel::Error);
    assert_eq!(latest.message, "❌ Analysis failed: inference service unreachable");

    let screen = render_app(&app, 160, 50);
    assert!(screen_contains(&screen, "Analysis failed (r to retry)"));
    assert!(screen_contains(&screen, "inference service unreachable"));
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_analysis_completes_while_another_section_is_shown() {
    let mut app = HarvestApp::new(&test_config());
    app.navigate(Section::Quality);
    app.handle_key(KeyCode::Char('s'));
    app.navigate(Section::Dashboard);
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }

    tokio::time::advance(Duration::from_secs(10)).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    app.tick();

    assert_eq!(app.router().current(), Section::Dashboard);
    assert_eq!(app.quality().simulator().state().name(), "complete");
    assert_eq!(app.quality().simulator().state().result().map(|r| r.score), Some(96));
    assert_eq!(app.status_log().latest().unwrap().level, LogLevel::Success);
}
