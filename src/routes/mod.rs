pub mod health;
pub mod play;
pub mod setup;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{middleware::security_headers, state::AppState};

/// Build the application router with all routes and middleware
pub fn app(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:8000".parse().expect("static origin"),
            "http://127.0.0.1:8000".parse().expect("static origin"),
        ])
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        // Health and root
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Setup
        .route("/api/categories", get(setup::list_categories))
        .route(
            "/api/config",
            get(setup::get_config).put(setup::update_config),
        )
        .route("/api/words/parse", post(setup::parse_words))
        .route("/api/games", post(setup::start_game))
        .route("/api/stats", get(play::stats))
        // Reveal and debate
        .route(
            "/api/games/:game_id",
            get(play::get_game).delete(play::discard_game),
        )
        .route("/api/games/:game_id/confirm", post(play::confirm_identity))
        .route("/api/games/:game_id/reveal", post(play::reveal))
        .route("/api/games/:game_id/acknowledge", post(play::acknowledge))
        .route("/api/games/:game_id/restart", post(play::restart_game))
        .with_state(state)
        // Middleware layers (outermost first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(
                    security_headers::security_headers_middleware,
                ))
                .layer(cors)
                // Always longer than the AI fetch so its fallback can still answer
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
