// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_comment;
mod postgres_item;
mod postgres_user;

pub use error::map_sqlx;
pub use memory::InMemoryStore;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_item::PostgresItemRepository;
pub use postgres_user::PostgresUserRepository;
