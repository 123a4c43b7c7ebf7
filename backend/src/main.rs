use dotenvy::dotenv;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod handlers {
    pub mod contact_handlers;
}
mod models {
    pub mod contact_models;
}
mod config {
    pub mod mail;
}
mod utils {
    pub mod mailer;
}

use config::mail::MailConfig;
use handlers::contact_handlers;
use utils::mailer::{Mailer, ResendMailer};

pub struct AppState {
    mailer: Arc<dyn Mailer>,
}

async fn health_check() -> &'static str {
    "OK"
}

// The legal documents live as static PDFs next to the frontend bundle; these
// routes just keep the human-readable URLs working.
async fn terms_of_service() -> Redirect {
    Redirect::temporary("/assets/Terms%20of%20Service-AutoNerds%20AI.pdf")
}

async fn privacy_policy() -> Redirect {
    Redirect::temporary("/assets/Privacy%20Policy-AutoNerds%20AI.pdf")
}

pub fn validate_env() {
    let _ = std::env::var("RESEND_API_KEY")
        .expect("RESEND_API_KEY must be set");
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    validate_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mail_config = MailConfig::from_env();
    let mailer = Arc::new(ResendMailer::new(&mail_config));

    let state = Arc::new(AppState { mailer });

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route("/terms-of-service-autonerds-ai", get(terms_of_service))
        .route("/privacy-policy-autonerds-ai", get(privacy_policy))
        .fallback_service(ServeDir::new("dist"))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3001").await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
