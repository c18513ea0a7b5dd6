use actix_web::{web, App, HttpServer};
use scorebook::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use scorebook::{routes, telemetry, AppConfig, AppState};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let (host, port) = (config.host.clone(), config.port);

    let app_state = match AppState::build(config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };
    info!(%host, port, club = %app_state.config.club_name, "starting scorebook");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
