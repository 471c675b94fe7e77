use std::sync::Arc;

use crate::{application::services::view_gate::ViewCountGate, domain::item::ItemReadRepository};

pub struct ItemQueryService {
    pub(super) read_repo: Arc<dyn ItemReadRepository>,
    pub(super) view_gate: Arc<ViewCountGate>,
    pub(super) page_size: u32,
}

impl ItemQueryService {
    pub fn new(
        read_repo: Arc<dyn ItemReadRepository>,
        view_gate: Arc<ViewCountGate>,
        page_size: u32,
    ) -> Self {
        Self {
            read_repo,
            view_gate,
            page_size,
        }
    }
}
