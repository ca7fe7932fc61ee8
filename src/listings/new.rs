use axum::{
    debug_handler,
    extract::{Multipart, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{flash, include_res, pages, session, uploads, AppResult, AppState};

use super::form;

#[debug_handler]
pub(crate) async fn page(session: Session) -> AppResult<Response> {
    if session::user_id(&session).await?.is_none() {
        return session::login_redirect(&session).await;
    }

    let flashes = flash::take(&session).await?;
    Ok(pages::with_flash(include_res!(str, "/pages/listings/new.html"), &flashes).into_response())
}

#[debug_handler]
pub(crate) async fn create(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> AppResult<Response> {
    let Some(user_id) = session::user_id(&session).await? else {
        return session::login_redirect(&session).await;
    };

    let form = form::read_form(multipart).await?;
    let image = match &form.image {
        Some(file) => {
            uploads::store_image(&state.config.uploads_dir, &file.name, &file.bytes).await?
        }
        None => uploads::placeholder(),
    };

    let id = Uuid::now_v7().to_string();
    sqlx::query(
        "INSERT INTO listings (id,title,description,price,location,country,owner_id,image_filename,image_url) \
         VALUES (?,?,?,?,?,?,?,?,?)",
    )
    .bind(&id)
    .bind(&form.title)
    .bind(&form.description)
    .bind(form.price)
    .bind(&form.location)
    .bind(&form.country)
    .bind(&user_id)
    .bind(&image.filename)
    .bind(&image.url)
    .execute(&state.db_pool)
    .await?;

    tracing::info!("listing {id} created by {user_id}");
    flash::success(&session, "New Listing Created").await?;
    Ok(Redirect::to("/listings").into_response())
}
