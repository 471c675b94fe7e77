mod follow;
mod login;
mod logout;
mod password;
mod profile;
mod service;
mod signup;

pub use follow::ToggleFollowCommand;
pub use login::{LoginCommand, LoginResult};
pub use profile::UpdateProfileCommand;
pub use service::UserCommandService;
pub use signup::SignupCommand;
