pub mod analysis;
pub mod catalog;
pub mod error;
pub mod logistics;
pub mod marketplace;
pub mod models;
pub mod selector;
pub mod ui;
