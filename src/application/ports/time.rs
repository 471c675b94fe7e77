// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for record timestamps and in-process marker expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
