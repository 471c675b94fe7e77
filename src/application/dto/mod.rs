pub mod auth;
pub mod comments;
pub mod items;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::{CommentDto, CommentLikeDto};
pub use items::{ItemDetailDto, ItemSummaryDto};
pub use pagination::Page;
pub use users::{FollowDto, FollowToggleDto, UserDto, UserProfileDto};
