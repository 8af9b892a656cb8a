//! Startup seeding of the superuser account.

use tracing::{info, warn};

use crate::config::BootstrapAdmin;
use crate::db::{AdminStorage, AdminTier, NewAdmin};
use crate::error::AppError;
use crate::password;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created(i64),
    AlreadyPresent,
    MissingCredentials,
}

/// Insert a tier-1 admin when none exists yet.
pub async fn ensure_superuser(
    storage: &AdminStorage,
    credentials: Option<BootstrapAdmin>,
) -> Result<BootstrapOutcome, AppError> {
    if storage.has_superuser().await? {
        info!("superuser already present; skipping bootstrap");
        return Ok(BootstrapOutcome::AlreadyPresent);
    }

    let Some(adm) = credentials else {
        warn!("no superuser in store and ADM_NOME/ADM_EMAIL/ADM_SENHA not set; skipping bootstrap");
        return Ok(BootstrapOutcome::MissingCredentials);
    };

    let senha_hash = password::hash_password(&adm.senha)?;
    let id = storage
        .insert_admin(&NewAdmin {
            nome: &adm.nome,
            email: &adm.email,
            senha_hash: &senha_hash,
            tier: AdminTier::Superuser,
        })
        .await
        .map_err(|e| match e {
            AppError::EmailTaken => AppError::Config(format!(
                "bootstrap admin email ADM_EMAIL={} already belongs to a regular account",
                adm.email
            )),
            other => other,
        })?;
    info!(admin_id = id, email = %adm.email, "superuser created");
    Ok(BootstrapOutcome::Created(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_storage() -> AdminStorage {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let storage = AdminStorage::new(pool);
        storage.init_schema().await.unwrap();
        storage
    }

    fn creds(email: &str) -> Option<BootstrapAdmin> {
        Some(BootstrapAdmin {
            nome: "adm".to_string(),
            email: email.to_string(),
            senha: "adm123".to_string(),
        })
    }

    #[tokio::test]
    async fn creates_superuser_once() {
        let storage = memory_storage().await;

        let first = ensure_superuser(&storage, creds("adm@gmail.com")).await.unwrap();
        let BootstrapOutcome::Created(id) = first else {
            panic!("expected a created superuser, got {first:?}");
        };

        let second = ensure_superuser(&storage, creds("outro@gmail.com")).await.unwrap();
        assert_eq!(second, BootstrapOutcome::AlreadyPresent);
        assert!(storage.find_by_email("outro@gmail.com").await.unwrap().is_none());

        let adm = storage.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(adm.tier, AdminTier::Superuser);
        assert_ne!(adm.senha, "adm123");
        assert!(password::verify_password("adm123", &adm.senha));
    }

    #[tokio::test]
    async fn email_owned_by_regular_admin_is_a_config_error() {
        let storage = memory_storage().await;
        storage
            .insert_admin(&NewAdmin {
                nome: "Ana",
                email: "adm@gmail.com",
                senha_hash: "$argon2id$stub",
                tier: AdminTier::Regular,
            })
            .await
            .unwrap();

        let err = ensure_superuser(&storage, creds("adm@gmail.com")).await.unwrap_err();
        let AppError::Config(msg) = &err else {
            panic!("expected a config error, got {err:?}");
        };
        assert!(msg.contains("ADM_EMAIL=adm@gmail.com"));
        assert!(!storage.has_superuser().await.unwrap());
    }

    #[tokio::test]
    async fn missing_credentials_leave_store_untouched() {
        let storage = memory_storage().await;
        let outcome = ensure_superuser(&storage, None).await.unwrap();
        assert_eq!(outcome, BootstrapOutcome::MissingCredentials);
        assert!(!storage.has_superuser().await.unwrap());
    }
}
