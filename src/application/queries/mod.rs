// src/application/queries/mod.rs
pub mod comments;
pub mod items;
pub mod users;
