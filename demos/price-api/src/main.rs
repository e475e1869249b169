mod error;
mod routes;
mod state;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    eprintln!("Initializing MetalDesk SDK...");
    let sdk = metaldesk_sdk::AsyncMetaldeskSdk::builder()
        .demo_data(true)
        .build()
        .await
        .expect("Failed to initialize MetalDesk SDK");
    eprintln!("SDK ready.");

    let state = Arc::new(AppState {
        sdk,
        access_tokens: Mutex::new(HashMap::new()),
        refresh_tokens: Mutex::new(HashMap::new()),
    });

    let app = Router::new()
        .route("/company", get(routes::companies::list_companies))
        .route(
            "/company/sync/{external_id}",
            get(routes::sync::sync_tokens),
        )
        .route(
            "/company/price/{access_token}",
            get(routes::sync::current_prices),
        )
        .route(
            "/company/generate-refresh-token",
            post(routes::sync::regenerate_access_token),
        )
        .route(
            "/company/{id}",
            get(routes::companies::get_company)
                .put(routes::companies::update_company)
                .delete(routes::companies::close_company),
        )
        .route(
            "/company/{id}/external-id",
            post(routes::companies::generate_external_id),
        )
        .route(
            "/user",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/user/{id}",
            get(routes::users::get_user).put(routes::users::update_user),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = "0.0.0.0:8000";
    eprintln!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
