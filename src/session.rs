use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::{flash, AppResult};

pub const USER_ID: &str = "user_id";

pub async fn user_id(session: &Session) -> AppResult<Option<String>> {
    Ok(session.get::<String>(USER_ID).await?)
}

pub async fn login_redirect(session: &Session) -> AppResult<Response> {
    flash::error(session, "You must be logged in first").await?;
    Ok(Redirect::to("/login").into_response())
}
