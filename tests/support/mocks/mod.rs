// tests/support/mocks/mod.rs
pub mod markers;
pub mod security;
pub mod time;

pub use markers::{FailingMarkerStore, FailingViewCounter};
pub use security::{DummyTokenManager, StrictPasswordHasher, token_for};
pub use time::{MutableClock, fixed_now};
