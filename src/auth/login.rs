use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
    debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{flash, include_res, models::User, pages, AppResult};

#[derive(Deserialize)]
pub(crate) struct LoginForm {
    username: String,
    password: String,
}

#[debug_handler]
pub(crate) async fn login_page(session: Session) -> AppResult<Response> {
    let flashes = flash::take(&session).await?;
    Ok(pages::with_flash(include_res!(str, "/pages/users/login.html"), &flashes).into_response())
}

#[debug_handler]
pub(crate) async fn login(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(LoginForm { username, password }): Form<LoginForm>,
) -> AppResult<Response> {
    let user: Option<User> =
        sqlx::query_as("SELECT id,username,email,password_hash FROM users WHERE username=?")
            .bind(&username)
            .fetch_optional(&db_pool)
            .await?;

    let Some(user) = user else {
        return failed(&session).await;
    };

    let hash = PasswordHash::new(&user.password_hash)?;
    if Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_err()
    {
        return failed(&session).await;
    }

    super::log_in(&session, &user.id).await?;
    flash::success(&session, "Welcome back!").await?;
    Ok(Redirect::to("/listings").into_response())
}

async fn failed(session: &Session) -> AppResult<Response> {
    flash::error(session, "Invalid username or password").await?;
    Ok(Redirect::to("/login").into_response())
}
