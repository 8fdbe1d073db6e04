use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use pollbox_app::domain::{PollOption, PollSummary, PollWithOptions};
use pollbox_app::AppContext;
use pollbox_errors::AppError;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct CreatePollRequest {
    question: Option<String>,
    options: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct VoterEmail {
    user_email: Option<String>,
}

/// The REST facade: the JSON contract the browser client (and anything
/// else) consumes. Routes delegate straight to the application services.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/api/polls", post(create_poll).get(list_polls))
        .route("/api/polls/{id}", get(get_poll).delete(delete_poll))
        .route("/api/options/{id}/vote", post(cast_vote))
        .route("/api/health", get(health))
        .with_state(ctx)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn create_poll(
    State(ctx): State<AppContext>,
    Json(body): Json<CreatePollRequest>,
) -> Result<(StatusCode, Json<PollWithOptions>), AppError> {
    let question = body.question.unwrap_or_default();
    let options = body.options.unwrap_or_default();
    let poll = ctx.manage_polls.create(&question, &options).await?;
    Ok((StatusCode::CREATED, Json(poll)))
}

async fn list_polls(State(ctx): State<AppContext>) -> Result<Json<Vec<PollSummary>>, AppError> {
    Ok(Json(ctx.manage_polls.list().await?))
}

async fn get_poll(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<PollWithOptions>, AppError> {
    let id = parse_id(&id, "Poll")?;
    Ok(Json(ctx.manage_polls.get(id).await?))
}

async fn delete_poll(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    Json(body): Json<VoterEmail>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id, "Poll")?;
    let email = body.user_email.unwrap_or_default();
    ctx.manage_polls.delete(id, &email).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn cast_vote(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    Json(body): Json<VoterEmail>,
) -> Result<Json<PollOption>, AppError> {
    let id = parse_id(&id, "Option")?;
    let email = body.user_email.unwrap_or_default();
    Ok(Json(ctx.cast_vote.execute(id, &email).await?))
}

// Ids arrive as raw path strings so a non-numeric id surfaces as our own
// 400 body instead of the framework's rejection.
fn parse_id(raw: &str, kind: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("Invalid {kind} ID provided.")))
}
