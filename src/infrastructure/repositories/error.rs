use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users.username";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                // SQLite reports the offending column in the message rather than
                // the constraint name.
                return if db_err.message().contains(CNT_USER_USERNAME) {
                    DomainError::Conflict("username already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
