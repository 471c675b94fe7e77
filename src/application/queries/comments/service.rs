use std::sync::Arc;

use crate::domain::{comment::CommentRepository, item::ItemReadRepository};

pub struct CommentQueryService {
    pub(super) item_repo: Arc<dyn ItemReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(
        item_repo: Arc<dyn ItemReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            item_repo,
            comment_repo,
        }
    }
}
