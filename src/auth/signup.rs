use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use axum::{
    debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{flash, include_res, pages, AppResult};

#[derive(Deserialize)]
pub(crate) struct SignupForm {
    username: String,
    email: String,
    password: String,
}

#[debug_handler]
pub(crate) async fn signup_page(session: Session) -> AppResult<Response> {
    let flashes = flash::take(&session).await?;
    Ok(pages::with_flash(include_res!(str, "/pages/users/signup.html"), &flashes).into_response())
}

#[debug_handler]
pub(crate) async fn signup(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(SignupForm {
        username,
        email,
        password,
    }): Form<SignupForm>,
) -> AppResult<Response> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    let id = Uuid::now_v7().to_string();
    let inserted = sqlx::query("INSERT INTO users (id,username,email,password_hash) VALUES (?,?,?,?)")
        .bind(&id)
        .bind(&username)
        .bind(&email)
        .bind(&password_hash)
        .execute(&db_pool)
        .await;

    match inserted {
        Ok(_) => {
            tracing::info!("new user {username}");
            super::log_in(&session, &id).await?;
            flash::success(&session, "Welcome to Wanderlust!").await?;
            Ok(Redirect::to("/listings").into_response())
        }
        // duplicate usernames land here; the store's message is shown as-is
        Err(e) => {
            flash::error(&session, e.to_string()).await?;
            Ok(Redirect::to("/signup").into_response())
        }
    }
}
