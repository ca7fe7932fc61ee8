use axum::{
    debug_handler,
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    flash, include_res, models::Listing, pages, session, uploads, AppResult, AppState,
};

use super::form;

#[debug_handler]
pub(crate) async fn page(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    if session::user_id(&session).await?.is_none() {
        return session::login_redirect(&session).await;
    }

    let Some(listing) = fetch(&db_pool, &id).await? else {
        flash::error(&session, "Listing Not Found").await?;
        return Ok(Redirect::to("/listings").into_response());
    };

    let flashes = flash::take(&session).await?;
    let body = include_res!(str, "/pages/listings/edit.html")
        .replace("{id}", &listing.id)
        .replace("{price}", &listing.price.to_string())
        .replace("{title}", &pages::esc(&listing.title))
        .replace("{description}", &pages::esc(&listing.description))
        .replace("{location}", &pages::esc(&listing.location))
        .replace("{country}", &pages::esc(&listing.country));
    Ok(pages::with_flash(&body, &flashes).into_response())
}

#[debug_handler]
pub(crate) async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> AppResult<Response> {
    let Some(user_id) = session::user_id(&session).await? else {
        return session::login_redirect(&session).await;
    };

    let Some(listing) = fetch(&state.db_pool, &id).await? else {
        flash::error(&session, "Listing Not Found").await?;
        return Ok(Redirect::to("/listings").into_response());
    };

    // owner_id is checked, never reassigned
    if listing.owner_id != user_id {
        flash::error(&session, "You do not have permission to edit this listing").await?;
        return Ok(Redirect::to(&format!("/listings/{id}")).into_response());
    }

    let form = form::read_form(multipart).await?;
    match &form.image {
        Some(file) => {
            let image =
                uploads::store_image(&state.config.uploads_dir, &file.name, &file.bytes).await?;
            sqlx::query(
                "UPDATE listings SET title=?,description=?,price=?,location=?,country=?,\
                 image_filename=?,image_url=? WHERE id=?",
            )
            .bind(&form.title)
            .bind(&form.description)
            .bind(form.price)
            .bind(&form.location)
            .bind(&form.country)
            .bind(&image.filename)
            .bind(&image.url)
            .bind(&listing.id)
            .execute(&state.db_pool)
            .await?;
        }
        None => {
            sqlx::query(
                "UPDATE listings SET title=?,description=?,price=?,location=?,country=? WHERE id=?",
            )
            .bind(&form.title)
            .bind(&form.description)
            .bind(form.price)
            .bind(&form.location)
            .bind(&form.country)
            .bind(&listing.id)
            .execute(&state.db_pool)
            .await?;
        }
    }

    flash::success(&session, "Listing Updated Successfully").await?;
    Ok(Redirect::to(&format!("/listings/{id}")).into_response())
}

async fn fetch(db_pool: &SqlitePool, id: &Uuid) -> AppResult<Option<Listing>> {
    Ok(sqlx::query_as(
        "SELECT id,title,description,price,location,country,owner_id,image_filename,image_url \
         FROM listings WHERE id=?",
    )
    .bind(id.to_string())
    .fetch_optional(db_pool)
    .await?)
}
