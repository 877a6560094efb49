use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    EmailAddress, NewUser, PasswordHash, PersonName, User, UserId, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const USER_COLUMNS: &str = "id, name, email, username, password_hash, created_at";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            name: PersonName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            name,
            email,
            username,
            password_hash,
            created_at,
        } = new_user;

        let sql = format!(
            "INSERT INTO users (name, email, username, password_hash, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(name.as_str())
            .bind(email.as_str())
            .bind(username.as_str())
            .bind(password_hash.as_str())
            .bind(created_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users WHERE id IN ("));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(i64::from(*id));
        }
        separated.push_unseparated(")");

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
