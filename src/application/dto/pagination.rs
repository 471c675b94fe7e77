use crate::domain::item::PageWindow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page-number pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub next: Option<u32>,
    pub previous: Option<u32>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(window: PageWindow, results: Vec<T>) -> Self {
        Self {
            count: window.total,
            page: window.page,
            page_size: window.page_size,
            total_pages: window.total_pages,
            next: window.next(),
            previous: window.previous(),
            results,
        }
    }
}
