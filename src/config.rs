use axum_extra::extract::cookie::Key;
use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use crate::error::AppError;

/// Cookie keys need 64 bytes of material (32 signing + 32 encryption).
pub const MIN_SECRET_LEN: usize = 64;

const ENV_KEYS: &[&str] = &[
    "secret_key",
    "database_url",
    "upload_folder",
    "listen_addr",
    "loglevel",
    "adm_nome",
    "adm_email",
    "adm_senha",
];

#[derive(Clone, Deserialize)]
pub struct Config {
    pub secret_key: String,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_upload_folder")]
    pub upload_folder: PathBuf,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
    pub adm_nome: Option<String>,
    pub adm_email: Option<String>,
    pub adm_senha: Option<String>,
}

/// Credentials for the superuser seeded at startup.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

fn default_database_url() -> String {
    "sqlite:admins.db".to_string()
}

fn default_upload_folder() -> PathBuf {
    PathBuf::from("static/uploads")
}

fn default_listen_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    /// Load from raw process environment (`SECRET_KEY`, `DATABASE_URL`, ...).
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_figment(Figment::new().merge(Env::raw().only(ENV_KEYS)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, AppError> {
        let cfg: Config = figment
            .extract()
            .map_err(|e| AppError::Config(e.to_string()))?;
        cfg.cookie_key()?;
        Ok(cfg)
    }

    /// Key used to encrypt and authenticate the session cookie.
    pub fn cookie_key(&self) -> Result<Key, AppError> {
        Key::try_from(self.secret_key.as_bytes()).map_err(|_| {
            AppError::Config(format!(
                "SECRET_KEY must be at least {MIN_SECRET_LEN} bytes long"
            ))
        })
    }

    /// Returns the bootstrap superuser only when all three values are set.
    pub fn bootstrap_admin(&self) -> Option<BootstrapAdmin> {
        Some(BootstrapAdmin {
            nome: self.adm_nome.clone()?,
            email: self.adm_email.clone()?,
            senha: self.adm_senha.clone()?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("upload_folder", &self.upload_folder)
            .field("listen_addr", &self.listen_addr)
            .field("loglevel", &self.loglevel)
            .field("adm_nome", &self.adm_nome)
            .field("adm_email", &self.adm_email)
            .field("adm_senha", &self.adm_senha.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
