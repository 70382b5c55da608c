use sqlx::PgPool;

use crate::database::models::user::{NewUser, UserEntity};

/// Account storage. Credential digests are computed before they get here;
/// this layer never sees plaintext passwords.
pub struct UserRepository;

impl UserRepository {
    /// Inserts a new account. A duplicate `login` surfaces as the unique
    /// violation from Postgres for the caller to map.
    pub async fn create(pool: &PgPool, user: &NewUser) -> Result<UserEntity, sqlx::Error> {
        let created = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (name, login, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, login, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.login)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(pool)
        .await?;

        tracing::info!("Registered user {} ({})", created.id, created.login);
        Ok(created)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, login, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lookup-based login: matches login and stored digest in one statement,
    /// so a wrong password and an unknown login are indistinguishable here.
    pub async fn find_by_credentials(
        pool: &PgPool,
        login: &str,
        password_hash: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, login, email, password_hash, created_at, updated_at
            FROM users
            WHERE login = $1 AND password_hash = $2
            "#,
        )
        .bind(login)
        .bind(password_hash)
        .fetch_optional(pool)
        .await
    }
}
