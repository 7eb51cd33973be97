/**
 * User Store
 *
 * This module defines the persistence seam for user records: a `UserStore`
 * trait with a PostgreSQL implementation for production and an in-memory
 * implementation for tests and local development.
 *
 * Lookups downstream of the auth gate go through `find_profile`, which
 * returns the credential-free projection; only the login path reads the
 * full record with the password hash.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, UserProfile, UserRecord};

/// Errors surfaced by user store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with the same email already exists
    #[error("email already exists")]
    DuplicateEmail,

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence seam for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return its credential-free profile.
    async fn create(&self, new_user: NewUser) -> Result<UserProfile, StoreError>;

    /// Look up a user by identifier, excluding the credential field.
    ///
    /// An identifier that cannot possibly match a persisted user (e.g. not
    /// a valid UUID for the Postgres store) resolves to `Ok(None)`, not an
    /// error.
    async fn find_profile(&self, id: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Look up the full record (including the password hash) by email.
    /// Only the login path may call this.
    async fn find_credentials(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// PostgreSQL-backed user store.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the `users` table.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    full_name: String,
    email: String,
    password_hash: String,
    profile_pic: String,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

/// Credential-free row projection used by `find_profile`.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    full_name: String,
    email: String,
    profile_pic: String,
    created_at: chrono::DateTime<Utc>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: row.id.to_string(),
            full_name: row.full_name,
            email: row.email,
            password_hash: row.password_hash,
            profile_pic: row.profile_pic,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        UserProfile {
            id: row.id.to_string(),
            full_name: row.full_name,
            email: row.email,
            profile_pic: row.profile_pic,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new_user: NewUser) -> Result<UserProfile, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO users (id, full_name, email, password_hash, profile_pic, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, full_name, email, profile_pic, created_at
            "#,
        )
        .bind(id)
        .bind(&new_user.full_name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.profile_pic)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
            _ => StoreError::Database(e),
        })?;

        Ok(row.into())
    }

    async fn find_profile(&self, id: &str) -> Result<Option<UserProfile>, StoreError> {
        // A non-UUID identifier cannot match any row.
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, full_name, email, profile_pic, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, email, password_hash, profile_pic, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}

/// In-memory user store for tests and local development.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user record with a caller-chosen identifier.
    pub fn seed(&self, record: UserRecord) {
        self.users
            .lock()
            .expect("user store lock poisoned")
            .insert(record.id.clone(), record);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<UserProfile, StoreError> {
        let mut users = self.users.lock().expect("user store lock poisoned");
        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            full_name: new_user.full_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            profile_pic: new_user.profile_pic,
            created_at: now,
            updated_at: now,
        };
        let profile = UserProfile::from(&record);
        users.insert(record.id.clone(), record);
        Ok(profile)
    }

    async fn find_profile(&self, id: &str) -> Result<Option<UserProfile>, StoreError> {
        let users = self.users.lock().expect("user store lock poisoned");
        Ok(users.get(id).map(UserProfile::from))
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.lock().expect("user store lock poisoned");
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}
