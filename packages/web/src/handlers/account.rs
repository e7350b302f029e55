//! Landing page, registration, login and logout.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use market_api::{auth, Role};
use serde::Deserialize;
use tower_sessions::Session;

use super::{flash_redirect, page_context};
use crate::app::AppState;
use crate::error::AppError;
use crate::views;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub role: String,
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn home(session: Session) -> Result<Html<String>, AppError> {
    Ok(views::home(page_context(&session).await?))
}

pub async fn register_page(session: Session) -> Result<Html<String>, AppError> {
    Ok(views::register(page_context(&session).await?))
}

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    let result = match form.role.parse::<Role>() {
        Ok(role) => {
            auth::register(&state.pool, role, &form.name, &form.username, &form.password).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => flash_redirect(&session, "Registration successful! Please log in.", "/login").await,
        Err(e) if e.is_user_facing() => flash_redirect(&session, e.to_string(), "/register").await,
        Err(e) => Err(e.into()),
    }
}

pub async fn login_page(session: Session) -> Result<Html<String>, AppError> {
    Ok(views::login(page_context(&session).await?))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    match auth::login(&state.pool, &form.username, &form.password).await {
        Ok(user) => {
            let info = user.to_info();
            auth::establish(&session, &info).await?;
            let home = match info.role {
                Role::Farmer => "/farmer",
                Role::Customer => "/customer",
            };
            flash_redirect(&session, "Login successful!", home).await
        }
        Err(e) if e.is_user_facing() => flash_redirect(&session, e.to_string(), "/login").await,
        Err(e) => Err(e.into()),
    }
}

pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    auth::logout(&session).await?;
    flash_redirect(&session, "You have been logged out.", "/").await
}
