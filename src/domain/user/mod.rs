// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{AuthorRef, NewUser, User, UserUpdate};
pub use repository::{FollowRepository, UserRepository};
pub use value_objects::{Email, Gender, PasswordHash, PersonName, UserId, Username};
