use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_FOLLOW_SELF: &str = "follows_not_self_chk";
const CNT_FOLLOW_PAIR: &str = "follows_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_USER_EMAIL => {
                        return DomainError::Conflict("email already exists".into());
                    }
                    CNT_FOLLOW_SELF => {
                        return DomainError::Validation("you cannot follow yourself".into());
                    }
                    CNT_FOLLOW_PAIR => {
                        return DomainError::Conflict("already following".into());
                    }
                    _ => {}
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
