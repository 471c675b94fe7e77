use super::ItemCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::item::ItemKind,
};

pub struct DeleteItemCommand {
    pub kind: ItemKind,
    pub id: i64,
}

impl ItemCommandService {
    pub async fn delete_item(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteItemCommand,
    ) -> ApplicationResult<()> {
        let item = self
            .load_owned(actor, command.kind, command.id, "delete")
            .await?;

        self.write_repo.delete(item.kind, item.id).await?;
        tracing::info!(kind = %item.kind, item_id = %item.id, "item deleted");
        Ok(())
    }
}
