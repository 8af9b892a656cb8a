use crate::db::models::{AdminTier, DbAdmin, DbWord, NewAdmin};
use crate::db::schema::SQLITE_INIT;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool on `database_url`, creating the SQLite file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct AdminStorage {
    pool: SqlitePool,
}

impl AdminStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert an admin and return its row id. A duplicate email yields
    /// `AppError::EmailTaken`.
    pub async fn insert_admin(&self, admin: &NewAdmin<'_>) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO admins (nome, email, senha, tier) VALUES (?, ?, ?, ?)")
            .bind(admin.nome)
            .bind(admin.email)
            .bind(admin.senha_hash)
            .bind(admin.tier.as_i64())
            .execute(&self.pool)
            .await
            .map_err(AppError::from_insert)?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<DbAdmin>, AppError> {
        let row = sqlx::query("SELECT id, nome, email, senha, tier FROM admins WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_admin).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<DbAdmin>, AppError> {
        let row = sqlx::query("SELECT id, nome, email, senha, tier FROM admins WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_admin).transpose()
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn has_superuser(&self) -> Result<bool, AppError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admins WHERE tier = ?")
            .bind(AdminTier::Superuser.as_i64())
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0 > 0)
    }

    pub async fn list_words(&self) -> Result<Vec<DbWord>, AppError> {
        let words = sqlx::query_as::<_, DbWord>(
            "SELECT id, titulo, descricao, url FROM palavras ORDER BY titulo, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(words)
    }

    fn row_to_admin(row: SqliteRow) -> Result<DbAdmin, AppError> {
        let tier: Option<i64> = row.try_get("tier")?;
        Ok(DbAdmin {
            id: row.try_get("id")?,
            nome: row.try_get("nome")?,
            email: row.try_get("email")?,
            senha: row.try_get("senha")?,
            tier: AdminTier::from(tier.unwrap_or(0)),
        })
    }
}
