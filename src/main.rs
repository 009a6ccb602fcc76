use anyhow::Context;

use space_clicker::{config::Config, init_tracing, routes, state::ClickerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    println!("🚀 Space Clicker mini-app server starting...");

    let config = Config::from_env();
    let addr = config.bind_addr();
    let port = config.port;
    if config.is_development() {
        tracing::info!("Running in development mode");
    }

    let state = ClickerState::new(config);
    println!("📊 Game stats initialized");

    let app = routes::clicker_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("✅ Server listening on http://{}", addr);
    println!("📱 Frame URL: http://localhost:{}", port);
    println!("🎮 App URL: http://localhost:{}/app", port);
    println!(
        "📋 Manifest: http://localhost:{}/.well-known/farcaster.json",
        port
    );

    axum::serve(listener, app).await.context("Server error")?;

    println!("👋 Shutting down mini-app server...");
    Ok(())
}
