//! Cookie-held admin session and the guard for protected routes.
//!
//! The session lives entirely client-side in a private (encrypted and
//! authenticated) cookie. A cookie that fails to decrypt or parse is
//! treated exactly like a missing one, and so is a cookie whose account
//! no longer exists.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::router::AppState;

pub const SESSION_COOKIE: &str = "admin_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub admin_id: i64,
    pub admin_nome: String,
}

impl AdminSession {
    pub fn from_jar(jar: &PrivateCookieJar) -> Option<Self> {
        let cookie = jar.get(SESSION_COOKIE)?;
        serde_json::from_str(cookie.value()).ok()
    }

    /// Add the session cookie to the jar.
    pub fn store(&self, jar: PrivateCookieJar) -> Result<PrivateCookieJar, AppError> {
        let value = serde_json::to_string(self)?;
        Ok(jar.add(build_cookie(SESSION_COOKIE, value)))
    }
}

/// Remove the session cookie. Safe to call without a session.
pub fn clear_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(clear_cookie(SESSION_COOKIE))
}

/// Guard for the protected router: redirects to `/login` unless the request
/// carries a valid session for an account that still exists. The session
/// and the loaded `DbAdmin` are then exposed as extensions.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(session) = AdminSession::from_jar(&jar) else {
        debug!(path = %req.uri().path(), "no session; redirecting to login");
        return Redirect::to("/login").into_response();
    };

    let admin = match state.storage.find_by_id(session.admin_id).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            warn!(admin_id = session.admin_id, "session references a missing account");
            return (clear_session(jar), Redirect::to("/login")).into_response();
        }
        Err(e) => return e.into_response(),
    };

    req.extensions_mut().insert(session);
    req.extensions_mut().insert(admin);
    next.run(req).await
}

fn build_cookie(name: &str, value: String) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn clear_cookie(name: &str) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
