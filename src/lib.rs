// Game state stores and constants
pub mod core;

// Environment configuration
pub mod config;

// Error type shared by handlers
pub mod error;

// Middleware
pub mod middleware;

// Embed descriptors, frame views and request context
pub mod services;

// API models (requests/responses)
pub mod models;

// HTTP routes and router builders
pub mod routes;

// Application state
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initialize tracing
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "space_clicker=info,tower_http=warn".into()),
        )
        .init();
}
