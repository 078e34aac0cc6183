//! Axum router construction.

use axum::{
    routing::{get, post},
    Router,
};

use super::{handlers, middleware};

/// Build the application [`Router`] with all routes and middleware attached.
///
/// Cipher routes are served both under `/api` and at the root, so the JSON
/// API and the browser front-end hit the same handlers.
pub fn build(limits: middleware::Limits) -> Router {
    let routes = cipher_routes();
    let router = Router::new()
        .nest("/api", routes.clone())
        .merge(routes)
        .fallback(handlers::not_found);
    middleware::apply(router, limits)
}

fn cipher_routes() -> Router {
    Router::new()
        .route("/:cipher/encrypt", post(handlers::encrypt))
        .route("/:cipher/decrypt", post(handlers::decrypt))
        .route("/playfair/creatematrix", post(handlers::playfair_matrix))
        .route("/ciphers", get(handlers::list_ciphers))
        .route("/health", get(handlers::health))
}
