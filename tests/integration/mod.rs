mod analysis_simulator;
mod app_navigation;
