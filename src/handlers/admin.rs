//! Pages behind the session guard that only read.

use axum::{Extension, extract::State, response::Html};

use crate::db::DbAdmin;
use crate::error::AppError;
use crate::router::AppState;
use crate::templates::{AdminHomeTemplate, GlossarioTemplate, PerfilTemplate, render};

/// GET /admin and /index_perfil -> greets the signed-in admin.
pub async fn admin_home(Extension(admin): Extension<DbAdmin>) -> Result<Html<String>, AppError> {
    render(&AdminHomeTemplate { nome: admin.nome })
}

/// GET /perfil -> profile of the session's account.
pub async fn perfil(Extension(admin): Extension<DbAdmin>) -> Result<Html<String>, AppError> {
    render(&PerfilTemplate {
        nome: admin.nome,
        email: admin.email,
        tier_label: admin.tier.label(),
    })
}

/// GET /glossario -> catalog of words.
pub async fn glossario(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let words = state.storage.list_words().await?;
    render(&GlossarioTemplate { words })
}
