// src/application/commands/items/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateItemCommand;
pub use delete::DeleteItemCommand;
pub use service::ItemCommandService;
pub use update::UpdateItemCommand;
