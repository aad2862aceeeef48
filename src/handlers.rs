use crate::errors::AppError;
use crate::models::{Counter, InputRequest, SubmitRequest};
use crate::scoreboard::ScoreBoard;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let board = state.board.lock().await;
    Ok(Html(render_index(&state.page, &board)?))
}

pub async fn get_scores(State(state): State<AppState>) -> Json<ScoreBoard> {
    let board = state.board.lock().await;
    Json(board.clone())
}

pub async fn increment(
    State(state): State<AppState>,
    Path(counter): Path<String>,
) -> Result<Json<ScoreBoard>, AppError> {
    let counter: Counter = counter.parse()?;
    let board = apply(&state, |board| board.increment(counter, today())).await;
    Ok(Json(board))
}

pub async fn decrement(
    State(state): State<AppState>,
    Path(counter): Path<String>,
) -> Result<Json<ScoreBoard>, AppError> {
    let counter: Counter = counter.parse()?;
    let board = apply(&state, |board| board.decrement(counter, today())).await;
    Ok(Json(board))
}

pub async fn edit_input(
    State(state): State<AppState>,
    Path(counter): Path<String>,
    Json(payload): Json<InputRequest>,
) -> Result<Json<ScoreBoard>, AppError> {
    let counter: Counter = counter.parse()?;
    let board = apply(&state, |board| board.edit_input(counter, payload.text)).await;
    Ok(Json(board))
}

pub async fn submit_input(
    State(state): State<AppState>,
    Path(counter): Path<String>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<ScoreBoard>, AppError> {
    let counter: Counter = counter.parse()?;
    let board = apply(&state, |board| submit(board, counter, payload.value)).await;
    Ok(Json(board))
}

pub async fn form_increment(
    State(state): State<AppState>,
    Path(counter): Path<String>,
) -> Result<Redirect, AppError> {
    let counter: Counter = counter.parse()?;
    apply(&state, |board| board.increment(counter, today())).await;
    Ok(Redirect::to("/"))
}

pub async fn form_decrement(
    State(state): State<AppState>,
    Path(counter): Path<String>,
) -> Result<Redirect, AppError> {
    let counter: Counter = counter.parse()?;
    apply(&state, |board| board.decrement(counter, today())).await;
    Ok(Redirect::to("/"))
}

pub async fn form_set(
    State(state): State<AppState>,
    Path(counter): Path<String>,
    Form(payload): Form<SubmitRequest>,
) -> Result<Redirect, AppError> {
    let counter: Counter = counter.parse()?;
    apply(&state, |board| submit(board, counter, payload.value)).await;
    Ok(Redirect::to("/"))
}

async fn apply(state: &AppState, update: impl FnOnce(&mut ScoreBoard)) -> ScoreBoard {
    let mut board = state.board.lock().await;
    update(&mut board);
    board.clone()
}

fn submit(board: &mut ScoreBoard, counter: Counter, value: String) {
    board.edit_input(counter, value);
    if !board.submit_input(counter, today()) {
        debug!(%counter, input = board.input(counter), "ignored score input");
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
