// src/application/commands/mod.rs
pub mod comments;
pub mod items;
pub mod users;
