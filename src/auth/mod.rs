mod login;
mod logout;
mod signup;

use axum::{routing::get, Router};
use time::{Duration, OffsetDateTime};
use tower_sessions::{Expiry, Session};

use crate::{session::USER_ID, AppResult, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup::signup_page).post(signup::signup))
        .route("/login", get(login::login_page).post(login::login))
        .route("/logout", get(logout::logout))
}

// 7-day window stamped once at login; not refreshed per request
pub(crate) async fn log_in(session: &Session, user_id: &str) -> AppResult<()> {
    session.insert(USER_ID, user_id).await?;
    session.set_expiry(Some(Expiry::AtDateTime(
        OffsetDateTime::now_utc() + Duration::days(7),
    )));
    Ok(())
}
