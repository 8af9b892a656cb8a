use axum::{http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

pub const EMAIL_TAKEN_MESSAGE: &str = "Erro: Email já cadastrado.";
pub const INVALID_LOGIN_MESSAGE: &str = "Login inválido.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor.";

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("email already registered")]
    EmailTaken,

    #[error("invalid email or password")]
    InvalidLogin,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Map a failed admin insert, turning the `admins.email` UNIQUE violation
    /// into `EmailTaken`.
    pub fn from_insert(e: SqlxError) -> Self {
        match &e {
            SqlxError::Database(db) if db.is_unique_violation() => AppError::EmailTaken,
            _ => AppError::DatabaseError(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::EmailTaken => (StatusCode::CONFLICT, EMAIL_TAKEN_MESSAGE),
            AppError::InvalidLogin => (StatusCode::UNAUTHORIZED, INVALID_LOGIN_MESSAGE),
            AppError::DatabaseError(_)
            | AppError::PasswordHash(_)
            | AppError::Json(_)
            | AppError::Template(_)
            | AppError::Config(_) => {
                error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };
        (status, message).into_response()
    }
}
