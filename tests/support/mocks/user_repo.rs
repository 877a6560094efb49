// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use quire::domain::errors::{DomainError, DomainResult};
use quire::domain::user::{
    EmailAddress, NewUser, PasswordHash, PersonName, User, UserId, UserRepository, Username,
};
use std::sync::Mutex;

use super::{security::HASH_PREFIX, time::fixed_now};

/// User table kept in memory. Usernames are unique, like the real schema.
#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user whose password verifies with `PlainPasswordHasher`.
    pub fn seed(&self, name: &str, username: &str, password: &str) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: UserId::new(users.len() as i64 + 1).unwrap(),
            name: PersonName::new(name).unwrap(),
            email: EmailAddress::new(format!("{username}@example.com")).unwrap(),
            username: Username::new(username).unwrap(),
            password_hash: PasswordHash::new(format!("{HASH_PREFIX}{password}")).unwrap(),
            created_at: fixed_now(),
        };
        users.push(user.clone());
        user
    }

    pub fn remove(&self, id: UserId) {
        self.users.lock().unwrap().retain(|user| user.id != id);
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let next_id = users.iter().map(|user| i64::from(user.id)).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(next_id)?,
            name: new_user.name,
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }
}
