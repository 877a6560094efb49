use crate::domain::user::{User, UserId};

/// The user bound to the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub name: String,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.into(),
            name: user.name.into(),
        }
    }
}
