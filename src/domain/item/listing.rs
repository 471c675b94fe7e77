// src/domain/item/listing.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::item::{entity::Item, value_objects::ItemKind};
use std::cmp::Ordering;

/// Case-insensitive substring filter over title and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Blank or missing input means "no filtering".
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw: trimmed.to_string(),
            folded: trimmed.to_lowercase(),
        })
    }

    pub fn matches(&self, title: &str, content: &str) -> bool {
        title.to_lowercase().contains(&self.folded)
            || content.to_lowercase().contains(&self.folded)
    }

    /// `ILIKE` pattern for the term. `%`, `_` and `\` are escaped so they
    /// match literally under the default `\` escape character.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.raw.len() + 2);
        pattern.push('%');
        for ch in self.raw.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

/// Accepted `ordering` values. Anything else falls back to `Newest`.
/// Every explicit ordering breaks ties by ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemOrdering {
    #[default]
    Newest,
    CreatedAtAsc,
    CreatedAtDesc,
    ViewCountAsc,
    ViewCountDesc,
}

impl ItemOrdering {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("created_at") => ItemOrdering::CreatedAtAsc,
            Some("-created_at") => ItemOrdering::CreatedAtDesc,
            Some("view_count") => ItemOrdering::ViewCountAsc,
            Some("-view_count") => ItemOrdering::ViewCountDesc,
            _ => ItemOrdering::Newest,
        }
    }

    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let by_id = a.id.cmp(&b.id);
        match self {
            ItemOrdering::Newest => b.id.cmp(&a.id),
            ItemOrdering::CreatedAtAsc => a.created_at.cmp(&b.created_at).then(by_id),
            ItemOrdering::CreatedAtDesc => b.created_at.cmp(&a.created_at).then(by_id),
            ItemOrdering::ViewCountAsc => a.view_count.cmp(&b.view_count).then(by_id),
            ItemOrdering::ViewCountDesc => b.view_count.cmp(&a.view_count).then(by_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemListing {
    pub kind: ItemKind,
    pub search: Option<SearchTerm>,
    pub ordering: ItemOrdering,
}

impl ItemListing {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            search: None,
            ordering: ItemOrdering::default(),
        }
    }

    pub fn with_search(mut self, search: Option<SearchTerm>) -> Self {
        self.search = search;
        self
    }

    pub fn with_ordering(mut self, ordering: ItemOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn matches(&self, item: &Item) -> bool {
        item.kind == self.kind
            && self
                .search
                .as_ref()
                .is_none_or(|term| term.matches(item.title.as_str(), item.content.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    Number(u32),
    Last,
}

impl PageNumber {
    /// Missing or empty means the first page. Anything that is not a
    /// positive integer or `last` is an invalid page.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(PageNumber::Number(1)),
            Some("last") => Ok(PageNumber::Last),
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|page| *page > 0)
                .map(PageNumber::Number)
                .ok_or_else(|| DomainError::NotFound("invalid page".into())),
        }
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        PageNumber::Number(1)
    }
}

/// A resolved page: bounds-checked against the filtered total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl PageWindow {
    pub fn resolve(requested: PageNumber, page_size: u32, total: u64) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }

        // An empty collection still has one (empty) page.
        let pages = total.div_ceil(u64::from(page_size)).max(1);
        let total_pages = u32::try_from(pages).unwrap_or(u32::MAX);

        let page = match requested {
            PageNumber::Number(page) => page,
            PageNumber::Last => total_pages,
        };
        if page == 0 || page > total_pages {
            return Err(DomainError::NotFound("invalid page".into()));
        }

        Ok(Self {
            page,
            page_size,
            total,
            total_pages,
        })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    pub fn next(&self) -> Option<u32> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }

    pub fn previous(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }
}
