//! One view per navigable section.

pub mod dashboard;
pub mod home;
pub mod logistics;
pub mod marketplace;
pub mod quality;
pub mod weather;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use logistics::LogisticsView;
pub use marketplace::MarketplaceView;
pub use quality::QualityView;
pub use weather::WeatherView;
