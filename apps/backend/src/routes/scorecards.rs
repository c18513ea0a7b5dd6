//! Live scoring routes under /api/scorecards/{match_id}.
//!
//! Mutating routes answer with the refreshed scorecard view so clients never
//! need a second round trip.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::snapshot::ScorecardView;
use crate::domain::{
    BallEvent, BallInput, BattingField, BowlingField, DismissalKind, InningsNo, PendingWicket,
    RosterEntry, ScoreOutcome,
};
use crate::error::AppError;
use crate::services::LiveRole;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectRequest {
    role: LiveRole,
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmWicketRequest {
    kind: DismissalKind,
    #[serde(default)]
    fielder: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InningsRequest {
    innings: InningsNo,
}

#[derive(Debug, Deserialize)]
struct InningsQuery {
    innings: InningsNo,
}

#[derive(Debug, Deserialize)]
struct AddRowRequest {
    innings: InningsNo,
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct EditRequest<F> {
    innings: InningsNo,
    field: F,
    /// Raw text as typed; numeric fields coerce bad input to 0.
    value: String,
}

#[derive(Debug, Deserialize)]
struct ByesRequest {
    innings: InningsNo,
    value: String,
}

/// Result of POST .../balls and .../wicket/confirm.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BallResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<BallEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending_wicket: Option<PendingWicket>,
    scorecard: ScorecardView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlagResponse {
    applied: bool,
    scorecard: ScorecardView,
}

fn view(app_state: &AppState, match_id: &str) -> Result<ScorecardView, AppError> {
    app_state
        .scorecards
        .view(match_id, OffsetDateTime::now_utc())
}

/// POST /api/scorecards/{match_id}
///
/// Open the scorecard, resuming a saved one or starting from the fixture.
async fn start(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let match_id = path.into_inner();
    let view = app_state
        .scorecards
        .start(&match_id, OffsetDateTime::now_utc())?;
    Ok(web::Json(view))
}

/// GET /api/scorecards/{match_id}
async fn get_scorecard(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    Ok(web::Json(view(&app_state, &path)?))
}

/// POST /api/scorecards/{match_id}/live
async fn select_player(
    path: web::Path<String>,
    body: web::Json<SelectRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let match_id = path.into_inner();
    let SelectRequest { role, id, name } = body.into_inner();
    app_state
        .scorecards
        .select(&match_id, role, &RosterEntry::new(id, name))?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

/// POST /api/scorecards/{match_id}/balls
///
/// A ball flagged `isWicket` is held for confirmation and reported as
/// `pendingWicket`; anything else is scored immediately.
async fn score_ball(
    path: web::Path<String>,
    body: web::Json<BallInput>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<BallResponse>, AppError> {
    let match_id = path.into_inner();
    let outcome = app_state
        .scorecards
        .score(&match_id, body.into_inner(), OffsetDateTime::now_utc())?;
    let (event, pending_wicket) = match outcome {
        ScoreOutcome::Scored(event) => (Some(event), None),
        ScoreOutcome::WicketPending(pending) => (None, Some(pending)),
    };
    Ok(web::Json(BallResponse {
        event,
        pending_wicket,
        scorecard: view(&app_state, &match_id)?,
    }))
}

/// POST /api/scorecards/{match_id}/wicket/confirm
async fn confirm_wicket(
    path: web::Path<String>,
    body: web::Json<ConfirmWicketRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<BallResponse>, AppError> {
    let match_id = path.into_inner();
    let ConfirmWicketRequest { kind, fielder } = body.into_inner();
    let event = app_state.scorecards.confirm_wicket(
        &match_id,
        kind,
        fielder,
        OffsetDateTime::now_utc(),
    )?;
    Ok(web::Json(BallResponse {
        event: Some(event),
        pending_wicket: None,
        scorecard: view(&app_state, &match_id)?,
    }))
}

/// POST /api/scorecards/{match_id}/wicket/cancel
async fn cancel_wicket(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<FlagResponse>, AppError> {
    let match_id = path.into_inner();
    let applied = app_state.scorecards.cancel_wicket(&match_id)?;
    Ok(web::Json(FlagResponse {
        applied,
        scorecard: view(&app_state, &match_id)?,
    }))
}

/// POST /api/scorecards/{match_id}/undo
///
/// `applied` is false when there was nothing to undo.
async fn undo(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<FlagResponse>, AppError> {
    let match_id = path.into_inner();
    let applied = app_state.scorecards.undo(&match_id)?;
    Ok(web::Json(FlagResponse {
        applied,
        scorecard: view(&app_state, &match_id)?,
    }))
}

/// POST /api/scorecards/{match_id}/innings
async fn switch_innings(
    path: web::Path<String>,
    body: web::Json<InningsRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let match_id = path.into_inner();
    app_state
        .scorecards
        .switch_innings(&match_id, body.innings)?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

async fn add_batting_row(
    path: web::Path<String>,
    body: web::Json<AddRowRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let match_id = path.into_inner();
    let AddRowRequest { innings, id, name } = body.into_inner();
    app_state
        .scorecards
        .add_batting_row(&match_id, innings, &RosterEntry::new(id, name))?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

async fn add_bowling_row(
    path: web::Path<String>,
    body: web::Json<AddRowRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let match_id = path.into_inner();
    let AddRowRequest { innings, id, name } = body.into_inner();
    app_state
        .scorecards
        .add_bowling_row(&match_id, innings, &RosterEntry::new(id, name))?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

/// PATCH /api/scorecards/{match_id}/batting/{row}
async fn edit_batting(
    path: web::Path<(String, String)>,
    body: web::Json<EditRequest<BattingField>>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let (match_id, row) = path.into_inner();
    app_state
        .scorecards
        .edit_batting(&match_id, body.innings, &row, body.field, &body.value)?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

async fn remove_batting_row(
    path: web::Path<(String, String)>,
    query: web::Query<InningsQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let (match_id, row) = path.into_inner();
    app_state
        .scorecards
        .remove_batting_row(&match_id, query.innings, &row)?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

/// PATCH /api/scorecards/{match_id}/bowling/{row}
async fn edit_bowling(
    path: web::Path<(String, String)>,
    body: web::Json<EditRequest<BowlingField>>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let (match_id, row) = path.into_inner();
    app_state
        .scorecards
        .edit_bowling(&match_id, body.innings, &row, body.field, &body.value)?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

async fn remove_bowling_row(
    path: web::Path<(String, String)>,
    query: web::Query<InningsQuery>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let (match_id, row) = path.into_inner();
    app_state
        .scorecards
        .remove_bowling_row(&match_id, query.innings, &row)?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

/// PATCH /api/scorecards/{match_id}/byes
async fn set_byes(
    path: web::Path<String>,
    body: web::Json<ByesRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ScorecardView>, AppError> {
    let match_id = path.into_inner();
    app_state
        .scorecards
        .set_bye_runs(&match_id, body.innings, &body.value)?;
    Ok(web::Json(view(&app_state, &match_id)?))
}

/// POST /api/scorecards/{match_id}/save
async fn save(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.scorecards.save(&path)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{match_id}")
            .route(web::post().to(start))
            .route(web::get().to(get_scorecard)),
    )
    .route("/{match_id}/live", web::post().to(select_player))
    .route("/{match_id}/balls", web::post().to(score_ball))
    .route("/{match_id}/wicket/confirm", web::post().to(confirm_wicket))
    .route("/{match_id}/wicket/cancel", web::post().to(cancel_wicket))
    .route("/{match_id}/undo", web::post().to(undo))
    .route("/{match_id}/innings", web::post().to(switch_innings))
    .route("/{match_id}/batting", web::post().to(add_batting_row))
    .service(
        web::resource("/{match_id}/batting/{row}")
            .route(web::patch().to(edit_batting))
            .route(web::delete().to(remove_batting_row)),
    )
    .route("/{match_id}/bowling", web::post().to(add_bowling_row))
    .service(
        web::resource("/{match_id}/bowling/{row}")
            .route(web::patch().to(edit_bowling))
            .route(web::delete().to(remove_bowling_row)),
    )
    .route("/{match_id}/byes", web::patch().to(set_byes))
    .route("/{match_id}/save", web::post().to(save));
}
