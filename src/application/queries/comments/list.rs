use super::CommentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::item::{ItemId, ItemKind},
};

pub struct ListCommentsQuery {
    pub kind: ItemKind,
    pub item_id: i64,
}

impl CommentQueryService {
    pub async fn list_comments(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let item_id = ItemId::new(query.item_id)
            .map_err(|_| ApplicationError::not_found(query.kind.not_found_message()))?;
        if self.item_repo.find_by_id(query.kind, item_id).await?.is_none() {
            return Err(ApplicationError::not_found(query.kind.not_found_message()));
        }

        let viewer = actor.map(|user| user.id);
        let comments = self.comment_repo.list_for_item(query.kind, item_id).await?;
        Ok(comments
            .into_iter()
            .map(|comment| CommentDto::for_viewer(comment, viewer))
            .collect())
    }
}
