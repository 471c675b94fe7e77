// src/domain/item/mod.rs
pub mod entity;
pub mod listing;
pub mod repository;
pub mod specifications;
pub mod value_objects;
pub mod views;

pub use entity::{Item, ItemUpdate, NewItem};
pub use listing::{ItemListing, ItemOrdering, PageNumber, PageWindow, SearchTerm};
pub use repository::{ItemReadRepository, ItemWriteRepository};
pub use value_objects::{ItemContent, ItemId, ItemKind, ItemTitle};
pub use views::{ClientAddress, ViewKey, ViewTarget, Viewer};
