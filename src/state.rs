use crate::scoreboard::ScoreBoard;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<Mutex<ScoreBoard>>,
    pub page: Arc<PageMeta>,
}

#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl AppState {
    pub fn new(board: ScoreBoard, page: PageMeta) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
            page: Arc::new(page),
        }
    }
}
