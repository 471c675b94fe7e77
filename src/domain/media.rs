use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_MEDIA_REF_LEN: usize = 255;

/// Reference to an uploaded file (relative storage path or absolute URL).
/// Storage itself lives outside this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("media reference cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_MEDIA_REF_LEN {
            return Err(DomainError::Validation(format!(
                "media reference must be at most {MAX_MEDIA_REF_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
