//! Page-number pagination used by the listing endpoints.

use crate::error::CoreError;

/// Default page size when the client omits `page_size`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 50;

/// A validated page request, ready to bind as `LIMIT` / `OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// Validate 1-based `page` and `page_size` and convert to limit/offset.
///
/// Missing values fall back to page 1 and [`DEFAULT_PAGE_SIZE`]. Values out
/// of range are rejected rather than clamped so clients notice the mistake.
pub fn page(page: Option<i64>, page_size: Option<i64>) -> Result<Page, CoreError> {
    let page = page.unwrap_or(1);
    let size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    if page < 1 {
        return Err(CoreError::Validation("page must be at least 1".into()));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        return Err(CoreError::Validation(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    let offset = (page - 1)
        .checked_mul(size)
        .ok_or_else(|| CoreError::Validation("page is too large".into()))?;

    Ok(Page {
        limit: size,
        offset,
    })
}
