//! SQL DDL for initializing the admin store.

/// SQLite schema with:
/// - `admins.email` UNIQUE, the only constraint registration relies on
/// - `admins.tier` 0 = regular, 1 = bootstrap superuser
/// - `palavras` catalog, read-only from this service
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS admins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    senha TEXT NOT NULL,
    tier INTEGER DEFAULT 0
);

CREATE TABLE IF NOT EXISTS palavras (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    titulo TEXT NOT NULL,
    descricao TEXT NOT NULL,
    url TEXT NOT NULL
);
"#;
