use backend::{build_rocket, routes::AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting polls server (standalone)");

    let _rocket = build_rocket(AppState::new()).launch().await?;
    info!("👋 Server shut down");
    Ok(())
}
