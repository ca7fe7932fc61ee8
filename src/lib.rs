pub mod appresult;
pub mod auth;
pub mod config;
pub mod db;
pub mod flash;
pub mod listings;
pub mod models;
pub mod pages;
pub mod session;
pub mod uploads;

use axum::{
    debug_handler,
    extract::{FromRef, Request},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower_http::services::ServeDir;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

pub use appresult::{AppError, AppResult};
pub use config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Config,
}

pub fn router(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd);

    let app = Router::new()
        .route("/", get(home))
        .merge(auth::router())
        .nest("/listings", listings::router())
        .nest_service("/uploads", ServeDir::new(&state.config.uploads_dir))
        .nest_service("/public", ServeDir::new("public"))
        .fallback(not_found)
        .with_state(state);

    // `method_override` must run before routing so the rewritten verb
    // reaches method dispatch. A `.layer` on the same router as the
    // method routes is applied *inside* method selection, so the app is
    // wrapped as an opaque service and the middleware sits outside it.
    Router::new()
        .fallback_service(app)
        .layer(middleware::from_fn(method_override))
        .layer(session_layer)
}

// browser forms can only POST; `?_method=PUT` and `?_method=DELETE`
// rewrite the verb before routing
async fn method_override(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        let target = req
            .uri()
            .query()
            .into_iter()
            .flat_map(|q| q.split('&'))
            .find_map(|pair| pair.strip_prefix("_method="));

        match target {
            Some(m) if m.eq_ignore_ascii_case("PUT") => *req.method_mut() = Method::PUT,
            Some(m) if m.eq_ignore_ascii_case("DELETE") => *req.method_mut() = Method::DELETE,
            _ => {}
        }
    }

    next.run(req).await
}

#[debug_handler]
async fn home() -> Redirect {
    Redirect::to("/listings")
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, pages::error_page("Page Not Found")).into_response()
}
