#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use axum_extra::extract::cookie::Key;
use libras_admin::db::{AdminStorage, connect};
use libras_admin::router::{AppState, app_router};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub storage: AdminStorage,
    db_path: PathBuf,
}

impl TestApp {
    pub async fn spawn(label: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut db_path = std::env::temp_dir();
        db_path.push(format!(
            "libras-admin-{label}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", db_path.display());
        let pool = connect(&database_url).await.expect("failed to open test db");
        let storage = AdminStorage::new(pool);
        storage.init_schema().await.expect("failed to init schema");

        let state = AppState::new(storage.clone(), Key::from(&[7u8; 64]));
        Self {
            app: app_router(state),
            storage,
            db_path,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder().method("GET").uri(uri);
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.send(req.body(Body::empty()).expect("failed to build request"))
            .await
    }

    pub async fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.send(req.body(Body::from(form.to_string())).expect("failed to build request"))
            .await
    }

    pub async fn register(&self, nome: &str, email: &str, senha: &str) -> Response<Body> {
        let form = format!("nome={nome}&email={}&senha={senha}", encode(email));
        self.post_form("/register", &form, None).await
    }

    pub async fn login(&self, email: &str, senha: &str) -> Response<Body> {
        let form = format!("email={}&senha={senha}", encode(email));
        self.post_form("/login", &form, None).await
    }

    async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(req).await.expect("request failed")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.db_path);
        for suffix in ["-wal", "-shm"] {
            let mut p = self.db_path.clone().into_os_string();
            p.push(suffix);
            let _ = fs::remove_file(p);
        }
    }
}

fn encode(s: &str) -> String {
    s.replace('@', "%40")
}

/// The `admin_session=<sealed>` pair set by a response, if it set a live one.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with("admin_session="))
        .filter(|pair| pair.len() > "admin_session=".len())
        .map(str::to_string)
}

/// Whether the response instructs the client to drop the session cookie.
pub fn clears_session(resp: &Response<Body>) -> bool {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("admin_session=;") || v == "admin_session=")
}

pub fn location(resp: &Response<Body>) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_text(resp: Response<Body>) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}
