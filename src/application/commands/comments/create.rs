use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentContent, NewComment},
        item::ItemKind,
    },
};

pub struct CreateCommentCommand {
    pub kind: ItemKind,
    pub item_id: i64,
    pub content: Option<String>,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let item_id = self.existing_item(command.kind, command.item_id).await?;

        let content = command
            .content
            .ok_or_else(|| ApplicationError::validation("content: this field is required"))?;
        let content = CommentContent::new(content).map_err(|e| ApplicationError::field("content", e))?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                kind: command.kind,
                item_id,
                author_id: actor.id,
                content,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(CommentDto::for_viewer(comment, Some(actor.id)))
    }
}
