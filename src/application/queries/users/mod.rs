mod profile;
mod service;

pub use profile::GetProfileByUsernameQuery;
pub use service::UserQueryService;
