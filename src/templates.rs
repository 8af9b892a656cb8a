//! Askama templates for the public and admin pages.

use askama::Template;
use axum::response::Html;

use crate::db::DbWord;
use crate::error::AppError;

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// Landing page for a signed-in admin.
#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminHomeTemplate {
    pub nome: String,
}

#[derive(Template)]
#[template(path = "perfil.html")]
pub struct PerfilTemplate {
    pub nome: String,
    pub email: String,
    pub tier_label: &'static str,
}

#[derive(Template)]
#[template(path = "glossario.html")]
pub struct GlossarioTemplate {
    pub words: Vec<DbWord>,
}

/// Video submission form; nothing handles its submission yet.
#[derive(Template)]
#[template(path = "envio_de_video.html")]
pub struct VideoFormTemplate;

#[derive(Template)]
#[template(path = "esqueceu_senha.html")]
pub struct ForgotPasswordTemplate;
