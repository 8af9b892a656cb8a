//! Public pages that need neither the store nor a session.

use axum::response::Html;

use crate::error::AppError;
use crate::templates::{ForgotPasswordTemplate, IndexTemplate, VideoFormTemplate, render};

/// GET / -> public landing page.
pub async fn index() -> Result<Html<String>, AppError> {
    render(&IndexTemplate)
}

/// GET /cad_palavra -> video submission form.
pub async fn cad_palavra() -> Result<Html<String>, AppError> {
    render(&VideoFormTemplate)
}

/// GET /esqueceu_senha -> password recovery page (informational only).
pub async fn esqueceu_senha() -> Result<Html<String>, AppError> {
    render(&ForgotPasswordTemplate)
}
