use axum::{debug_handler, response::Redirect};
use tower_sessions::Session;

use crate::{flash, AppResult};

#[debug_handler]
pub(crate) async fn logout(session: Session) -> AppResult<Redirect> {
    session.clear().await;
    flash::success(&session, "Logged you out!").await?;
    Ok(Redirect::to("/listings"))
}
