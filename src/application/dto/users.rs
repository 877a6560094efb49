use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name.into(),
            email: user.email.into(),
            username: user.username.into(),
            created_at: user.created_at,
        }
    }
}
