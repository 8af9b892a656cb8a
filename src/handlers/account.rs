//! Account lifecycle: registration, login, logout and self-service deletion.

use axum::{
    Extension, Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::{info, warn};

use crate::db::{AdminTier, NewAdmin};
use crate::error::AppError;
use crate::middleware::session::{AdminSession, clear_session};
use crate::password;
use crate::router::AppState;
use crate::templates::{LoginTemplate, RegisterTemplate, render};

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub senha: String,
}

pub async fn register_page() -> Result<Html<String>, AppError> {
    render(&RegisterTemplate)
}

/// POST /register -> creates a regular admin and signs it in.
pub async fn register_submit(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let senha_hash = password::hash_password(&form.senha)?;
    let admin_id = state
        .storage
        .insert_admin(&NewAdmin {
            nome: &form.nome,
            email: &form.email,
            senha_hash: &senha_hash,
            tier: AdminTier::Regular,
        })
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::EmailTaken) {
                info!("registration rejected: email already registered");
            }
        })?;

    info!(admin_id, "admin registered");
    let jar = AdminSession {
        admin_id,
        admin_nome: form.nome,
    }
    .store(jar)?;
    Ok((jar, Redirect::to("/admin")).into_response())
}

pub async fn login_page() -> Result<Html<String>, AppError> {
    render(&LoginTemplate)
}

/// POST /login -> verifies the password against the stored hash.
///
/// Unknown email and wrong password produce the same `InvalidLogin`.
pub async fn login_submit(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let admin = match state.storage.find_by_email(&form.email).await? {
        Some(admin) if password::verify_password(&form.senha, &admin.senha) => admin,
        Some(_) => {
            warn!("login rejected");
            return Err(AppError::InvalidLogin);
        }
        None => {
            // same argon2 cost as a wrong password
            password::verify_dummy(&form.senha);
            warn!("login rejected");
            return Err(AppError::InvalidLogin);
        }
    };

    info!(admin_id = admin.id, "admin logged in");
    let jar = AdminSession {
        admin_id: admin.id,
        admin_nome: admin.nome,
    }
    .store(jar)?;
    Ok((jar, Redirect::to("/admin")).into_response())
}

/// GET /logout -> always clears the session.
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    if let Some(session) = AdminSession::from_jar(&jar) {
        info!(admin_id = session.admin_id, "admin logged out");
    }
    (clear_session(jar), Redirect::to("/"))
}

/// POST /excluir_conta -> deletes the session's account and signs out.
pub async fn excluir_conta(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    jar: PrivateCookieJar,
) -> Result<Response, AppError> {
    let removed = state.storage.delete_by_id(session.admin_id).await?;
    info!(admin_id = session.admin_id, removed, "admin account deleted");
    Ok((clear_session(jar), Redirect::to("/")).into_response())
}
