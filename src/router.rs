use axum::{
    Router,
    extract::FromRef,
    middleware,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;

use crate::db::AdminStorage;
use crate::handlers::{account, admin, pages};
use crate::middleware::require_admin;

/// Per-request context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub storage: AdminStorage,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(storage: AdminStorage, cookie_key: Key) -> Self {
        Self {
            storage,
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/admin", get(admin::admin_home))
        .route("/index_perfil", get(admin::admin_home))
        .route("/perfil", get(admin::perfil))
        .route("/excluir_conta", post(account::excluir_conta))
        .route("/glossario", get(admin::glossario))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(pages::index))
        .route(
            "/register",
            get(account::register_page).post(account::register_submit),
        )
        .route(
            "/login",
            get(account::login_page).post(account::login_submit),
        )
        .route("/logout", get(account::logout))
        .route("/cad_palavra", get(pages::cad_palavra))
        .route("/esqueceu_senha", get(pages::esqueceu_senha))
        .merge(protected)
        .with_state(state)
}
