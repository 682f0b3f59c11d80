use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    response::IntoResponse,
};
use catalog::{DEFAULT_WINDOW_SIZE, Snippet};
use engine::{
    Algorithm, Element, Evaluation, InputMode, Slide, WindowParams, parse_input,
    validator::Validator,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::{
    error::AppError,
    reviews::{ReviewSummary, ReviewView},
    state::AppState,
};

#[derive(Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    input: String,
    #[serde(rename = "type")]
    mode: Option<String>,
}

#[derive(Deserialize)]
pub struct StepRequest {
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default)]
    window_start: i64,
    #[serde(default = "default_step_size")]
    window_size: i64,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    target: Option<i64>,
    bound: Option<i64>,
    threshold: Option<f64>,
    pattern: Option<String>,
}

#[derive(Deserialize)]
pub struct SlideRequest {
    #[serde(default)]
    elements: Vec<Element>,
    window_size: Option<i64>,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    pattern: Option<String>,
}

#[derive(Deserialize)]
pub struct CodeRequest {
    #[serde(default = "default_algorithm")]
    algorithm: String,
    #[serde(default = "default_window_type")]
    window_type: String,
    #[serde(default = "default_code_size")]
    window_size: u32,
    #[serde(default = "default_language")]
    language: String,
}

#[derive(Deserialize)]
pub struct ReviewRequest {
    rating: i64,
    feedback: Option<String>,
}

#[derive(Deserialize)]
pub struct ReviewsQuery {
    limit: Option<usize>,
}

fn default_step_size() -> i64 {
    1
}

fn default_algorithm() -> String {
    Algorithm::Sum.to_string()
}

fn default_window_type() -> String {
    "fixed".to_string()
}

fn default_code_size() -> u32 {
    DEFAULT_WINDOW_SIZE
}

fn default_language() -> String {
    "python".to_string()
}

fn payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!("Rejected payload: {rejection}");
        AppError::MalformedPayload
    })
}

/// Answers with `valid: false` rather than an error status, the frontend
/// shows the message inline.
pub async fn validate_input_handler(
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = payload(body)?;

    let parsed = request
        .mode
        .as_deref()
        .map_or(Ok(InputMode::default()), str::parse::<InputMode>)
        .and_then(|mode| parse_input(&request.input, mode));

    Ok(Json(match parsed {
        Ok(elements) => json!({ "valid": true, "parsed": elements }),
        Err(e) => {
            debug!("Input rejected: {e:?}");
            json!({ "valid": false, "error": e.to_string() })
        }
    }))
}

pub async fn calculate_step_handler(
    body: Result<Json<StepRequest>, JsonRejection>,
) -> Result<Json<Evaluation>, AppError> {
    let request = payload(body)?;
    Validator::validate_sequence(&request.elements)?;
    let algorithm: Algorithm = request.algorithm.parse()?;

    let params = WindowParams {
        start: Some(request.window_start),
        size: Some(request.window_size),
        target: request.target,
        bound: request.bound,
        threshold: request.threshold,
        pattern: request.pattern,
    };

    let evaluation = engine::evaluate(&request.elements, algorithm, &params).map_err(|e| {
        warn!("Error calculating step: {e}");
        e
    })?;

    Ok(Json(evaluation))
}

pub async fn slide_handler(
    body: Result<Json<SlideRequest>, JsonRejection>,
) -> Result<Json<Slide>, AppError> {
    let request = payload(body)?;
    Validator::validate_sequence(&request.elements)?;
    let algorithm: Algorithm = request.algorithm.parse()?;

    let params = WindowParams {
        size: request.window_size,
        pattern: request.pattern,
        ..WindowParams::default()
    };

    let slide = engine::slide(&request.elements, algorithm, &params).map_err(|e| {
        warn!("Error sliding window: {e}");
        e
    })?;

    Ok(Json(slide))
}

pub async fn generate_code_handler(
    body: Result<Json<CodeRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = payload(body)?;

    let Snippet {
        code,
        language,
        algorithm,
        window_type,
    } = catalog::lookup(
        &request.language,
        &request.window_type,
        &request.algorithm,
        request.window_size,
    )
    .map_err(|e| {
        warn!("Template lookup failed: {e:?}");
        e
    })?;

    Ok(Json(json!({
        "success": true,
        "code": code,
        "language": language,
        "algorithm": algorithm,
        "window_type": window_type,
    })))
}

pub async fn submit_review_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = payload(body)?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.chars().take(500).collect::<String>());

    let review = state
        .reviews
        .submit(request.rating, request.feedback.as_deref(), user_agent)
        .await?;

    info!("Review {} recorded: {} stars", review.id, review.rating);

    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn list_reviews_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ReviewsQuery>, QueryRejection>,
) -> Result<Json<Vec<ReviewView>>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Rejected query: {rejection}");
        AppError::MalformedPayload
    })?;

    let limit = query
        .limit
        .unwrap_or(state.config.review_page_size)
        .min(state.config.review_page_size);

    Ok(Json(state.reviews.recent(limit).await))
}

pub async fn review_summary_handler(State(state): State<Arc<AppState>>) -> Json<ReviewSummary> {
    Json(state.reviews.summary().await)
}
