use backend::{build_rocket_with, config::DEFAULT_ALLOWED_ORIGIN, routes::AppState};
use tracing::{info, warn};

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting polls server");

    let figment = match secret_store.get("ALLOWED_ORIGIN") {
        Some(origin) => rocket::Config::figment().merge(("allowed_origin", origin)),
        None => {
            warn!("ALLOWED_ORIGIN not found - CORS limited to {}", DEFAULT_ALLOWED_ORIGIN);
            rocket::Config::figment()
        }
    };

    let rocket = build_rocket_with(figment, AppState::new());

    Ok(rocket.into())
}
