use serde::{Deserialize, Serialize};

use super::error::SearchError;

/// Validated page coordinates; both values are at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Result<Self, SearchError> {
        if per_page < 1 {
            return Err(SearchError::input("per_page", "must be a positive integer"));
        }
        if page < 1 {
            return Err(SearchError::input("page", "must be a positive integer"));
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// Pagination block of a search response.
///
/// `from` and `to` follow the offset formula even past the last page, so
/// `from` may exceed `total` there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub last_page: i64,
    pub from: i64,
    pub to: i64,
}

/// Slice one page out of `items` and describe it.
///
/// `last_page` is `ceil(total / per_page)`, which is 0 for an empty result.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> (Vec<T>, Pagination) {
    let total = items.len() as i64;
    let offset = request.offset();
    let per_page = request.per_page();

    let page_items: Vec<T> = if offset >= total {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(offset as usize)
            .take(per_page as usize)
            .collect()
    };

    let last_page = total / per_page + i64::from(total % per_page != 0);

    let pagination = Pagination {
        total,
        per_page,
        current_page: request.page(),
        last_page,
        from: offset.saturating_add(1),
        to: offset.saturating_add(per_page).min(total),
    };

    (page_items, pagination)
}
