//! Homework status bot - main entry point.

use hwstatus_engine::infrastructure::{
    config::{BotConfig, DEFAULT_LOG_FILE},
    logging::init_tracing,
};
use hwstatus_engine::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    let config = BotConfig::from_env();
    let log_file = match &config {
        Ok(config) => config.log_file.clone(),
        Err(_) => DEFAULT_LOG_FILE.into(),
    };
    init_tracing(&log_file)?;

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, exiting");
            std::process::exit(1);
        }
    };

    tracing::info!(?config, "Starting homework status bot");

    let app = App::new(&config);
    app.watcher(&config)
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Could not listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await;

    tracing::info!("Homework status bot stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
