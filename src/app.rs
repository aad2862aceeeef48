use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/scores/:counter/increment", post(handlers::form_increment))
        .route("/scores/:counter/decrement", post(handlers::form_decrement))
        .route("/scores/:counter/set", post(handlers::form_set))
        .route("/api/scores", get(handlers::get_scores))
        .route("/api/scores/:counter/increment", post(handlers::increment))
        .route("/api/scores/:counter/decrement", post(handlers::decrement))
        .route("/api/scores/:counter/input", put(handlers::edit_input))
        .route("/api/scores/:counter/submit", post(handlers::submit_input))
        .with_state(state)
}
