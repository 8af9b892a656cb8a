use sqlx::FromRow;

/// Account tier stored in `admins.tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTier {
    Regular,
    Superuser,
}

impl AdminTier {
    pub fn as_i64(self) -> i64 {
        match self {
            AdminTier::Regular => 0,
            AdminTier::Superuser => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTier::Regular => "Administrador",
            AdminTier::Superuser => "Superusuário",
        }
    }
}

impl From<i64> for AdminTier {
    fn from(v: i64) -> Self {
        if v == 1 {
            AdminTier::Superuser
        } else {
            AdminTier::Regular
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbAdmin {
    pub id: i64,
    pub nome: String,
    pub email: String,
    /// argon2 PHC hash, never plaintext.
    pub senha: String,
    pub tier: AdminTier,
}

/// Insert payload; `senha_hash` must already be hashed.
#[derive(Debug, Clone)]
pub struct NewAdmin<'a> {
    pub nome: &'a str,
    pub email: &'a str,
    pub senha_hash: &'a str,
    pub tier: AdminTier,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbWord {
    pub id: i64,
    pub titulo: String,
    pub descricao: String,
    pub url: String,
}
