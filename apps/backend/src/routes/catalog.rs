//! Roster, fixture and club catalog routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::RosterEntry;
use crate::entities::{FieldingStrategy, ScheduledMatch};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/roster/{team}
///
/// Selection candidates for a team. The club name returns the club squad;
/// any other name is looked up among opponents.
async fn get_roster(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<RosterEntry>>, AppError> {
    let team = path.into_inner();
    Ok(web::Json(app_state.roster.candidates(&team)?))
}

/// GET /api/matches
async fn get_matches(
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<ScheduledMatch>>, AppError> {
    Ok(web::Json(app_state.roster.scheduled_matches()?))
}

async fn get_fielding(
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<FieldingStrategy>>, AppError> {
    Ok(web::Json(app_state.roster.fielding_strategies()?))
}

async fn put_fielding(
    body: web::Json<Vec<FieldingStrategy>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.roster.save_fielding_strategies(&body)?;
    Ok(HttpResponse::NoContent().finish())
}

#[derive(Debug, Serialize, Deserialize)]
struct TeamLogo {
    logo: Option<String>,
}

async fn get_team_logo(app_state: web::Data<AppState>) -> Result<web::Json<TeamLogo>, AppError> {
    Ok(web::Json(TeamLogo {
        logo: app_state.roster.team_logo()?,
    }))
}

async fn put_team_logo(
    body: web::Json<TeamLogo>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.roster.save_team_logo(body.logo.as_deref())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/roster/{team}", web::get().to(get_roster))
        .route("/matches", web::get().to(get_matches))
        .service(
            web::resource("/fielding")
                .route(web::get().to(get_fielding))
                .route(web::put().to(put_fielding)),
        )
        .service(
            web::resource("/team-logo")
                .route(web::get().to(get_team_logo))
                .route(web::put().to(put_team_logo)),
        );
}
