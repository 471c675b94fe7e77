mod detail;
mod list;
mod service;

pub use detail::GetItemQuery;
pub use list::ListItemsQuery;
pub use service::ItemQueryService;
