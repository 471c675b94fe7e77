use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password: password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApplicationError::validation(
            "password: password cannot be entirely numeric",
        ));
    }

    Ok(())
}

pub(super) fn ensure_confirmation(password: &str, confirmation: &str) -> ApplicationResult<()> {
    if password == confirmation {
        Ok(())
    } else {
        Err(ApplicationError::validation(
            "password2: password confirmation does not match",
        ))
    }
}
