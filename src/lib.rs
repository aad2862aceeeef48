pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoreboard;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use scoreboard::ScoreBoard;
pub use state::{AppState, PageMeta};
