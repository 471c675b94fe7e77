// src/domain/mod.rs
pub mod comment;
pub mod errors;
pub mod item;
pub mod media;
pub mod user;
