/**
 * User Model
 *
 * This module defines the user record and its credential-free projection.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full user record, including the password hash.
///
/// Only the login path reads this type; everything downstream of the auth
/// gate works with [`UserProfile`] instead.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub full_name: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Avatar image URL
    pub profile_pic: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Credential-free projection of a user.
///
/// This is the principal attached to authorized requests and the shape
/// returned to clients. The password hash is excluded by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Avatar image URL
    pub profile_pic: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        UserProfile {
            id: record.id.clone(),
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            profile_pic: record.profile_pic.clone(),
            created_at: record.created_at,
        }
    }
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_pic: String,
}

/// Pick a random stock avatar URL for a new user.
pub fn random_avatar() -> String {
    let index = (Uuid::new_v4().as_u128() % 100) + 1;
    format!("https://avatar.iran.liara.run/public/{index}.png")
}
