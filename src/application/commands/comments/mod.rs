mod create;
mod like;
mod service;

pub use create::CreateCommentCommand;
pub use like::ToggleCommentLikeCommand;
pub use service::CommentCommandService;
