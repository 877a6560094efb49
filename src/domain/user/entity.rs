// src/domain/user/entity.rs
use crate::domain::user::value_objects::{EmailAddress, PasswordHash, PersonName, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: PersonName,
    pub email: EmailAddress,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: PersonName,
    pub email: EmailAddress,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        name: PersonName,
        email: EmailAddress,
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            email,
            username,
            password_hash,
            created_at,
        }
    }
}
