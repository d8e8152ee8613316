use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::HarvestError;

// ============================================================================
// Navigation
// ============================================================================

/// Top-level navigable section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Marketplace,
    Logistics,
    Weather,
    Quality,
    Dashboard,
}

impl Section {
    /// All sections in navigation bar order
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Marketplace,
        Section::Logistics,
        Section::Weather,
        Section::Quality,
        Section::Dashboard,
    ];

    /// Stable lowercase identifier
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Marketplace => "marketplace",
            Section::Logistics => "logistics",
            Section::Weather => "weather",
            Section::Quality => "quality",
            Section::Dashboard => "dashboard",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Marketplace => "Marketplace",
            Section::Logistics => "Logistics",
            Section::Weather => "Weather",
            Section::Quality => "AI Grading",
            Section::Dashboard => "Dashboard",
        }
    }

    /// Position in `Section::ALL`
    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next section in navigation order, wrapping around
    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section in navigation order, wrapping around
    pub fn previous(&self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }

    /// View rendered for this section
    pub fn view(&self) -> ViewId {
        match self {
            Section::Home => ViewId::Home,
            Section::Marketplace => ViewId::Marketplace,
            Section::Logistics => ViewId::Logistics,
            Section::Weather => ViewId::Weather,
            Section::Quality => ViewId::Quality,
            Section::Dashboard => ViewId::Dashboard,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.id() == wanted)
            .ok_or_else(|| HarvestError::InvalidSection(s.to_string()))
    }
}

/// Identifier of the view a section renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Marketplace,
    Logistics,
    Weather,
    Quality,
    Dashboard,
}

/// Panels a view is composed of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Hero,
    Features,
    Marketplace,
    Logistics,
    Weather,
    Quality,
    Dashboard,
}

impl ViewId {
    /// Panels rendered for this view, top to bottom. The landing view is the
    /// hero banner followed by the feature list.
    pub fn panels(&self) -> &'static [Panel] {
        match self {
            ViewId::Home => &[Panel::Hero, Panel::Features],
            ViewId::Marketplace => &[Panel::Marketplace],
            ViewId::Logistics => &[Panel::Logistics],
            ViewId::Weather => &[Panel::Weather],
            ViewId::Quality => &[Panel::Quality],
            ViewId::Dashboard => &[Panel::Dashboard],
        }
    }
}

// ============================================================================
// Quality grading
// ============================================================================

/// Crop quality grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Grade {
    APlus,
    A,
    BPlus,
    B,
    Other(String),
}

/// Colour band a grade is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTier {
    Premium,
    Standard,
    Low,
}

impl Grade {
    pub fn tier(&self) -> GradeTier {
        match self {
            Grade::APlus | Grade::A => GradeTier::Premium,
            Grade::BPlus | Grade::B => GradeTier::Standard,
            Grade::Other(_) => GradeTier::Low,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::APlus => f.write_str("A+"),
            Grade::A => f.write_str("A"),
            Grade::BPlus => f.write_str("B+"),
            Grade::B => f.write_str("B"),
            Grade::Other(raw) => f.write_str(raw),
        }
    }
}

impl From<String> for Grade {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "A+" => Grade::APlus,
            "A" => Grade::A,
            "B+" => Grade::BPlus,
            "B" => Grade::B,
            _ => Grade::Other(raw),
        }
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.to_string()
    }
}

/// Per-attribute sub-scores, each 0-100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub color: u8,
    pub size: u8,
    pub shape: u8,
    pub surface: u8,
}

impl SubScores {
    /// Named scores in display order
    pub fn entries(&self) -> [(&'static str, u8); 4] {
        [
            ("Color", self.color),
            ("Size", self.size),
            ("Shape", self.shape),
            ("Surface", self.surface),
        ]
    }
}

/// Result of grading one crop image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityResult {
    pub grade: Grade,
    pub score: u8,
    pub quality: String,
    pub defects: u32,
    pub color: String,
    pub size: String,
    pub ripeness: u8,
    pub freshness: u8,
    pub market_value: String,
    pub recommendations: Vec<String>,
    pub details: SubScores,
}

impl QualityResult {
    /// The fixed result the simulated grader always produces
    pub fn premium_sample() -> Self {
        Self {
            grade: Grade::APlus,
            score: 96,
            quality: "Premium".to_string(),
            defects: 2,
            color: "Excellent".to_string(),
            size: "Large".to_string(),
            ripeness: 95,
            freshness: 98,
            market_value: "$4.80/lb".to_string(),
            recommendations: vec![
                "Harvest immediately for optimal quality".to_string(),
                "Store at 35-40°F to maintain freshness".to_string(),
                "Premium grade - suitable for export markets".to_string(),
            ],
            details: SubScores {
                color: 98,
                size: 94,
                shape: 96,
                surface: 95,
            },
        }
    }
}

// ============================================================================
// Marketplace
// ============================================================================

/// Marketplace listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub unit: String,
    pub seller: String,
    pub location: String,
    pub rating: f32,
    pub stock: u32,
    pub grade: Grade,
    pub trending: bool,
}

/// Headline figure with an optional change indicator
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: Option<&'static str>,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl StatCard {
    pub fn plain(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            change: None,
            trend: Trend::Flat,
        }
    }
}

// ============================================================================
// Logistics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    Optimal,
    Good,
    NotRecommended,
}

impl RouteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Optimal => "optimal",
            RouteStatus::Good => "good",
            RouteStatus::NotRecommended => "not-recommended",
        }
    }
}

/// RGB colour used for map overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Delivery route with its polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: u32,
    pub name: &'static str,
    pub distance: &'static str,
    pub duration: &'static str,
    pub fuel: &'static str,
    pub efficiency: u8,
    pub traffic: &'static str,
    pub weather: &'static str,
    pub stops: u32,
    pub status: RouteStatus,
    pub savings: &'static str,
    /// (latitude, longitude) pairs
    pub coordinates: Vec<(f64, f64)>,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    InTransit,
    Loading,
    Delivered,
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::InTransit => "in-transit",
            DeliveryStatus::Loading => "loading",
            DeliveryStatus::Delivered => "delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub id: &'static str,
    pub driver: &'static str,
    pub status: DeliveryStatus,
    pub progress: u8,
    pub eta: &'static str,
    pub location: &'static str,
}

/// Point marker with popup text
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: (f64, f64),
    pub title: &'static str,
    pub subtitle: &'static str,
}

// ============================================================================
// Weather
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Farm {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temp: i32,
    pub condition: &'static str,
    pub humidity: u8,
    pub wind_speed: u32,
    pub precipitation: u8,
    pub uv_index: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecast {
    pub time: &'static str,
    pub temp: i32,
    pub rain: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sky {
    Sun,
    Cloud,
    CloudRain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub day: &'static str,
    pub high: i32,
    pub low: i32,
    pub rain: u8,
    pub sky: Sky,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoilReading {
    pub hour: &'static str,
    pub moisture: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: &'static str,
    pub time: Option<&'static str>,
    pub severity: Severity,
}

// ============================================================================
// Landing page and dashboard
// ============================================================================

/// Feature card on the landing page; selecting it navigates to `target`
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub target: Section,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub revenue: u64,
    pub costs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CropShare {
    pub name: &'static str,
    pub value: u8,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldPoint {
    pub week: &'static str,
    pub actual: u32,
    pub predicted: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub message: &'static str,
    pub time: &'static str,
    pub status: ActivityStatus,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis_delay: Duration,
    pub tick_rate: Duration,
    pub log_file: Option<PathBuf>,
    pub start_section: Section,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(3000),
            tick_rate: Duration::from_millis(100),
            log_file: None,
            start_section: Section::Home,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, HarvestError> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Config::default();

        Ok(Config {
            analysis_delay: env_millis("HARVESTFLOW_ANALYSIS_DELAY_MS")?
                .unwrap_or(defaults.analysis_delay),
            tick_rate: env_millis("HARVESTFLOW_TICK_RATE_MS")?
                .unwrap_or(defaults.tick_rate),
            log_file: std::env::var("HARVESTFLOW_LOG_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            start_section: match std::env::var("HARVESTFLOW_START_SECTION") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|e: HarvestError| HarvestError::Config(e.to_string()))?,
                Err(_) => defaults.start_section,
            },
        })
    }
}

fn env_millis(key: &str) -> Result<Option<Duration>, HarvestError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| HarvestError::Config(format!("{} must be a number of milliseconds, got '{}'", key, raw))),
        Err(_) => Ok(None),
    }
}
