mod edit;
mod form;
mod index;
mod new;
mod remove;
mod reviews;
mod show;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::AppState;

const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index).post(new::create))
        .route("/new", get(new::page))
        .route(
            "/{id}",
            get(show::show).put(edit::update).delete(remove::remove),
        )
        .route("/{id}/edit", get(edit::page))
        .route("/{id}/reviews", post(reviews::create))
        .route("/{id}/reviews/{review_id}", delete(reviews::remove))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
