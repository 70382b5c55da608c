//! Repository tests against a live Postgres. Ignored by default; run with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use std::sync::atomic::{AtomicU32, Ordering};

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use contacts_backend::database::{
    ContactEntity, ContactRepository, NewContact, NewUser, UserRepository,
};
use contacts_backend::utils::hash_credential;

static SEQ: AtomicU32 = AtomicU32::new(0);

async fn connect() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for these tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to Postgres");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    pool
}

async fn fresh_user(pool: &PgPool, tag: &str) -> i32 {
    let n = SEQ.fetch_add(1, Ordering::Relaxed);
    let login = format!("{}_{}_{}", tag, std::process::id(), n);
    let user = UserRepository::create(
        pool,
        &NewUser {
            name: format!("Test {}", tag),
            login: login.clone(),
            email: format!("{}@example.com", login),
            password_hash: hash_credential("senha123"),
        },
    )
    .await
    .expect("create user");
    user.id
}

fn sample_contact(n: u32) -> NewContact {
    NewContact {
        name: format!("Contact {}", n),
        email: format!("contact{}@example.com", n),
        phone: format!("555-01{:02}", n),
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn add_then_get_round_trips_all_fields() {
    let pool = connect().await;
    let owner = fresh_user(&pool, "roundtrip").await;

    let created = ContactRepository::create(&pool, owner, &sample_contact(1))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.user_id, owner);

    let fetched = ContactRepository::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("contact exists");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn list_all_is_scoped_to_the_owner() {
    let pool = connect().await;
    let owner = fresh_user(&pool, "scoped").await;
    let other = fresh_user(&pool, "other").await;

    let mut mine = Vec::new();
    for n in 0..3 {
        mine.push(
            ContactRepository::create(&pool, owner, &sample_contact(n))
                .await
                .unwrap(),
        );
    }
    ContactRepository::create(&pool, other, &sample_contact(99))
        .await
        .unwrap();

    let listed = ContactRepository::list_all(&pool, owner).await.unwrap();
    assert_eq!(listed, mine);

    let empty_owner = fresh_user(&pool, "empty").await;
    assert!(
        ContactRepository::list_all(&pool, empty_owner)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn delete_reports_whether_a_row_was_removed() {
    let pool = connect().await;
    let owner = fresh_user(&pool, "delete").await;

    let created = ContactRepository::create(&pool, owner, &sample_contact(1))
        .await
        .unwrap();

    assert!(ContactRepository::delete(&pool, created.id).await.unwrap());
    assert!(
        ContactRepository::find_by_id(&pool, created.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(!ContactRepository::delete(&pool, created.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn update_replaces_all_mutable_fields() {
    let pool = connect().await;
    let owner = fresh_user(&pool, "update").await;

    let created = ContactRepository::create(&pool, owner, &sample_contact(1))
        .await
        .unwrap();

    let replacement = ContactEntity {
        name: "Renamed".into(),
        email: "renamed@example.com".into(),
        phone: "555-0999".into(),
        ..created.clone()
    };
    let updated = ContactRepository::update(&pool, &replacement).await.unwrap();
    assert_eq!(updated, replacement);

    let fetched = ContactRepository::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, replacement);
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn update_on_missing_id_fails_instead_of_inserting() {
    let pool = connect().await;
    let owner = fresh_user(&pool, "missing").await;

    let ghost = ContactEntity {
        id: i32::MAX,
        user_id: owner,
        name: "Ghost".into(),
        email: "ghost@example.com".into(),
        phone: "555-0000".into(),
    };
    let err = ContactRepository::update(&pool, &ghost).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
    assert!(
        ContactRepository::find_by_id(&pool, i32::MAX)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn create_without_valid_owner_violates_the_foreign_key() {
    let pool = connect().await;

    let err = ContactRepository::create(&pool, i32::MAX, &sample_contact(1))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db) => assert!(db.is_foreign_key_violation()),
        other => panic!("expected a database error, got {:?}", other),
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn credential_lookup_matches_only_the_exact_digest() {
    let pool = connect().await;
    let n = SEQ.fetch_add(1, Ordering::Relaxed);
    let login = format!("cred_{}_{}", std::process::id(), n);

    let created = UserRepository::create(
        &pool,
        &NewUser {
            name: "Cred Test".into(),
            login: login.clone(),
            email: format!("{}@example.com", login),
            password_hash: hash_credential("correct horse"),
        },
    )
    .await
    .unwrap();

    let found =
        UserRepository::find_by_credentials(&pool, &login, &hash_credential("correct horse"))
            .await
            .unwrap()
            .expect("credentials match");
    assert_eq!(found.id, created.id);

    assert!(
        UserRepository::find_by_credentials(&pool, &login, &hash_credential("wrong"))
            .await
            .unwrap()
            .is_none()
    );

    let dup = UserRepository::create(
        &pool,
        &NewUser {
            name: "Dup".into(),
            login,
            email: "dup@example.com".into(),
            password_hash: hash_credential("x"),
        },
    )
    .await
    .unwrap_err();
    match dup {
        sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
        other => panic!("expected a database error, got {:?}", other),
    }
}
