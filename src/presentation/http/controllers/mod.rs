// src/presentation/http/controllers/mod.rs
pub mod accounts;
pub mod comments;
pub mod items;

use crate::application::error::ApplicationError;
use crate::domain::item::ItemKind;
use crate::presentation::http::error::HttpError;

/// Non-numeric ids cannot match a resource, so they are a 404 rather than a
/// malformed request.
pub(crate) fn parse_id(raw: &str, missing: impl FnOnce() -> String) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::from_error(ApplicationError::not_found(missing())))
}

pub(crate) fn parse_item_id(kind: ItemKind, raw: &str) -> Result<i64, HttpError> {
    parse_id(raw, || kind.not_found_message())
}
