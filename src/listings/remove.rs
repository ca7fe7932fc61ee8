use axum::{
    debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{flash, session, AppResult};

// gated on login only, not ownership; review rows stay behind unreferenced
#[debug_handler]
pub(crate) async fn remove(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    if session::user_id(&session).await?.is_none() {
        return session::login_redirect(&session).await;
    }

    let mut tx = db_pool.begin().await?;
    sqlx::query("DELETE FROM listing_reviews WHERE listing_id=?")
        .bind(id.to_string())
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM listings WHERE id=?")
        .bind(id.to_string())
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    flash::success(&session, "Listing Deleted Successfully").await?;
    Ok(Redirect::to("/listings").into_response())
}
