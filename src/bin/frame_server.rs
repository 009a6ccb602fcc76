use anyhow::Context;

use space_clicker::{config::Config, init_tracing, routes, state::FrameState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    println!("🖼️ Frame game server starting...");

    let config = Config::from_env();
    let addr = config.bind_addr();
    let port = config.port;
    match config.frame_rng_seed {
        Some(seed) => tracing::info!("Frame game seeded with {}", seed),
        None => tracing::info!("Frame game seeded from entropy"),
    }

    let state = FrameState::new(config);
    println!("🎲 Frame game state initialized");

    let app = routes::frame_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("✅ Server listening on http://{}", addr);
    println!("🖼️ Frame URL: http://localhost:{}", port);

    axum::serve(listener, app).await.context("Server error")?;

    println!("👋 Shutting down frame server...");
    Ok(())
}
