use super::ItemQueryService;
use crate::{
    application::{
        dto::ItemDetailDto,
        error::{ApplicationError, ApplicationResult},
        services::view_gate::ViewOutcome,
    },
    domain::item::{ItemId, ItemKind, Viewer},
};

pub struct GetItemQuery {
    pub kind: ItemKind,
    pub id: i64,
}

impl ItemQueryService {
    /// Item detail. Runs the view gate as a side effect; the returned counter
    /// includes this view when it was counted.
    pub async fn get_item(
        &self,
        viewer: &Viewer,
        query: GetItemQuery,
    ) -> ApplicationResult<ItemDetailDto> {
        let id = ItemId::new(query.id)
            .map_err(|_| ApplicationError::not_found(query.kind.not_found_message()))?;
        let mut item = self
            .read_repo
            .find_by_id(query.kind, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(query.kind.not_found_message()))?;

        if let ViewOutcome::Counted(count) = self.view_gate.register_view(viewer, &item).await {
            item.observe_view_count(count);
        }

        Ok(item.into())
    }
}
