use api_rest::{router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use therabot_core::config::{path_from_env_value, resolve_assets_dir};
use therabot_core::{CoreConfig, PrescriptionService};

/// Main entry point for the TheraBot prescription service
///
/// Loads and validates the knowledge base, decodes any decoration images, then serves the
/// REST API. Knowledge-base errors are fatal here, before any request is accepted.
///
/// # Environment Variables
/// - `THERABOT_REST_ADDR`: REST server address (default: "0.0.0.0:3003")
/// - `THERABOT_ASSETS_DIR`: Directory holding `logo-no-bg.png` / `signature.png` (default: "assets")
/// - `THERABOT_KNOWLEDGE_FILE`: YAML knowledge table replacing the built-in one
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, knowledge loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("therabot_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("therabot_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("THERABOT_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3003".into());

    let assets_dir = resolve_assets_dir(path_from_env_value(
        std::env::var("THERABOT_ASSETS_DIR").ok(),
    ));
    let knowledge_file = path_from_env_value(std::env::var("THERABOT_KNOWLEDGE_FILE").ok());
    let cfg = CoreConfig::new(assets_dir, knowledge_file)?;

    let prescriptions = PrescriptionService::from_config(&cfg)?;

    tracing::info!("++ Starting TheraBot REST on {}", rest_addr);

    let app = router(AppState { prescriptions });
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
