use super::ItemQueryService;
use crate::{
    application::{
        dto::{ItemSummaryDto, Page},
        error::ApplicationResult,
    },
    domain::item::{ItemKind, ItemListing, ItemOrdering, PageNumber, PageWindow, SearchTerm},
};

/// Raw listing parameters as they arrive on the query string.
#[derive(Debug, Clone)]
pub struct ListItemsQuery {
    pub kind: ItemKind,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
}

impl ListItemsQuery {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            search: None,
            ordering: None,
            page: None,
        }
    }
}

impl ItemQueryService {
    pub async fn list_items(
        &self,
        query: ListItemsQuery,
    ) -> ApplicationResult<Page<ItemSummaryDto>> {
        let requested = PageNumber::parse(query.page.as_deref())?;
        let listing = ItemListing::new(query.kind)
            .with_search(SearchTerm::parse(query.search.as_deref()))
            .with_ordering(ItemOrdering::parse(query.ordering.as_deref()));

        let total = self.read_repo.count(&listing).await?;
        let window = PageWindow::resolve(requested, self.page_size, total)?;

        let records = self
            .read_repo
            .list_page(&listing, window.offset(), window.limit())
            .await?;

        let results = records.into_iter().map(Into::into).collect();
        Ok(Page::new(window, results))
    }
}
