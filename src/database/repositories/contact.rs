use sqlx::PgPool;

use crate::database::models::contact::{ContactEntity, NewContact};

/// Contact CRUD. Each call is one autocommitted statement against the pool;
/// there are no transactions, no locking, and no retries. Failures propagate
/// as `sqlx::Error` untranslated.
pub struct ContactRepository;

impl ContactRepository {
    /// Every contact owned by `owner_id`, in insertion order. The owner
    /// filter is mandatory; there is no unscoped listing.
    pub async fn list_all(pool: &PgPool, owner_id: i32) -> Result<Vec<ContactEntity>, sqlx::Error> {
        sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, user_id, name, email, phone
            FROM contacts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Lookup by bare id, not scoped by owner. Callers that act on behalf of
    /// a user must check `user_id` on the returned row themselves.
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<ContactEntity>, sqlx::Error> {
        sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, user_id, name, email, phone
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Persists a new contact for `owner_id`; the store assigns the id. A
    /// missing owner surfaces as the foreign-key violation from Postgres.
    pub async fn create(
        pool: &PgPool,
        owner_id: i32,
        contact: &NewContact,
    ) -> Result<ContactEntity, sqlx::Error> {
        let created = sqlx::query_as::<_, ContactEntity>(
            r#"
            INSERT INTO contacts (user_id, name, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, email, phone
            "#,
        )
        .bind(owner_id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .fetch_one(pool)
        .await?;

        tracing::debug!("Created contact {} for user {}", created.id, owner_id);
        Ok(created)
    }

    /// Full replace of the row's mutable fields. Fails with `RowNotFound`
    /// when the id does not exist; never creates a row.
    pub async fn update(
        pool: &PgPool,
        contact: &ContactEntity,
    ) -> Result<ContactEntity, sqlx::Error> {
        sqlx::query_as::<_, ContactEntity>(
            r#"
            UPDATE contacts
            SET name = $1, email = $2, phone = $3
            WHERE id = $4
            RETURNING id, user_id, name, email, phone
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.id)
        .fetch_one(pool)
        .await
    }

    /// Removes the row with that id. Returns true iff a row was removed;
    /// deleting a missing id is not an error.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
