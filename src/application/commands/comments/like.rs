use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto, CommentLikeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentId, LikeState},
        item::ItemKind,
    },
};

pub struct ToggleCommentLikeCommand {
    pub kind: ItemKind,
    pub item_id: i64,
    pub comment_id: i64,
}

impl CommentCommandService {
    /// Flip the caller's membership in the comment's like-set. Remove and
    /// add are each a single atomic statement in the store.
    pub async fn toggle_like(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: ToggleCommentLikeCommand,
    ) -> ApplicationResult<CommentLikeDto> {
        let actor = actor
            .ok_or_else(|| ApplicationError::unauthorized("authentication required to like comments"))?;

        let item_id = self.existing_item(command.kind, command.item_id).await?;
        let not_found = || ApplicationError::not_found("comment not found");
        let comment_id = CommentId::new(command.comment_id).map_err(|_| not_found())?;

        if self
            .comment_repo
            .find_in_item(command.kind, item_id, comment_id)
            .await?
            .is_none()
        {
            return Err(not_found());
        }

        let state = if self
            .comment_repo
            .remove_like(command.kind, comment_id, actor.id)
            .await?
        {
            LikeState::Unliked
        } else {
            // A concurrent add may win the race; either way the user ends up liked.
            self.comment_repo
                .add_like(command.kind, comment_id, actor.id)
                .await?;
            LikeState::Liked
        };

        let comment = self
            .comment_repo
            .find_in_item(command.kind, item_id, comment_id)
            .await?
            .ok_or_else(not_found)?;

        tracing::debug!(
            kind = %command.kind,
            comment_id = command.comment_id,
            user_id = actor.id.0,
            liked = state.is_liked(),
            "comment like toggled"
        );

        Ok(CommentLikeDto {
            message: state.message().to_string(),
            comment: CommentDto::for_viewer(comment, Some(actor.id)),
        })
    }
}
