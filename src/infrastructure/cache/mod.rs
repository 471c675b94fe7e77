// src/infrastructure/cache/mod.rs
mod memory;
mod redis_markers;

pub use memory::InMemoryViewMarkerStore;
pub use redis_markers::RedisViewMarkerStore;
