use axum::{
    debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    flash, include_res,
    models::{Listing, Review},
    pages, session, AppResult,
};

#[debug_handler]
pub(crate) async fn show(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let listing: Option<Listing> = sqlx::query_as(
        "SELECT id,title,description,price,location,country,owner_id,image_filename,image_url \
         FROM listings WHERE id=?",
    )
    .bind(id.to_string())
    .fetch_optional(&db_pool)
    .await?;

    let Some(listing) = listing else {
        flash::error(&session, "Listing Not Found").await?;
        return Ok(Redirect::to("/listings").into_response());
    };

    let (owner,): (String,) = sqlx::query_as("SELECT username FROM users WHERE id=?")
        .bind(&listing.owner_id)
        .fetch_one(&db_pool)
        .await?;

    let reviews: Vec<Review> = sqlx::query_as(
        "SELECT r.id,r.author_id,r.rating,r.comment FROM reviews r \
         JOIN listing_reviews lr ON lr.review_id = r.id \
         WHERE lr.listing_id=? ORDER BY lr.rowid",
    )
    .bind(&listing.id)
    .fetch_all(&db_pool)
    .await?;

    let user_id = session::user_id(&session).await?;

    let mut review_items = String::new();
    for review in &reviews {
        let (author,): (String,) = sqlx::query_as("SELECT username FROM users WHERE id=?")
            .bind(&review.author_id)
            .fetch_one(&db_pool)
            .await?;

        review_items += &include_res!(str, "/pages/listings/review_item.html")
            .replace("{listing_id}", &listing.id)
            .replace("{review_id}", &review.id)
            .replace("{rating}", &review.rating.to_string())
            .replace("{author}", &pages::esc(&author))
            .replace("{comment}", &pages::esc(&review.comment));
    }

    let owner_controls = if user_id.as_deref() == Some(listing.owner_id.as_str()) {
        include_res!(str, "/pages/listings/owner_controls.html").replace("{id}", &listing.id)
    } else {
        String::new()
    };
    let review_form = if user_id.is_some() {
        include_res!(str, "/pages/listings/review_form.html").replace("{id}", &listing.id)
    } else {
        String::new()
    };

    let flashes = flash::take(&session).await?;
    let body = include_res!(str, "/pages/listings/show.html")
        .replace("{image_url}", &listing.image_url)
        .replace("{price}", &listing.price.to_string())
        .replace("{title}", &pages::esc(&listing.title))
        .replace("{description}", &pages::esc(&listing.description))
        .replace("{location}", &pages::esc(&listing.location))
        .replace("{country}", &pages::esc(&listing.country))
        .replace("{owner}", &pages::esc(&owner))
        .replace("{owner_controls}", &owner_controls)
        .replace("{review_form}", &review_form)
        .replace("{reviews}", &review_items);
    Ok(pages::with_flash(&body, &flashes).into_response())
}
