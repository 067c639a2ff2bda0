pub mod app;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod selection;
pub mod source;
pub mod stats;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
