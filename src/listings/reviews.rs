use axum::{
    debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{flash, session, AppResult};

#[derive(Deserialize)]
pub(crate) struct ReviewForm {
    rating: i64,
    comment: String,
}

#[debug_handler]
pub(crate) async fn create(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Path(id): Path<Uuid>,
    Form(ReviewForm { rating, comment }): Form<ReviewForm>,
) -> AppResult<Response> {
    let Some(user_id) = session::user_id(&session).await? else {
        return session::login_redirect(&session).await;
    };

    let listing: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM listings WHERE id=?")
        .bind(id.to_string())
        .fetch_optional(&db_pool)
        .await?;
    if listing.is_none() {
        flash::error(&session, "Listing Not Found").await?;
        return Ok(Redirect::to("/listings").into_response());
    }

    // the row and its reference land together or not at all
    let review_id = Uuid::now_v7().to_string();
    let mut tx = db_pool.begin().await?;
    sqlx::query("INSERT INTO reviews (id,author_id,rating,comment) VALUES (?,?,?,?)")
        .bind(&review_id)
        .bind(&user_id)
        .bind(rating)
        .bind(&comment)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO listing_reviews (listing_id,review_id) VALUES (?,?)")
        .bind(id.to_string())
        .bind(&review_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    flash::success(&session, "Review Added Successfully").await?;
    Ok(Redirect::to(&format!("/listings/{id}")).into_response())
}

#[debug_handler]
pub(crate) async fn remove(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Path((id, review_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Response> {
    if session::user_id(&session).await?.is_none() {
        return session::login_redirect(&session).await;
    }

    let mut tx = db_pool.begin().await?;
    sqlx::query("DELETE FROM listing_reviews WHERE listing_id=? AND review_id=?")
        .bind(id.to_string())
        .bind(review_id.to_string())
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM reviews WHERE id=?")
        .bind(review_id.to_string())
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    flash::success(&session, "Review Deleted Successfully").await?;
    Ok(Redirect::to(&format!("/listings/{id}")).into_response())
}
