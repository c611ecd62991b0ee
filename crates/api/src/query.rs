//! Shared query parameter types for API handlers.
//!
//! Paging fields are repeated per struct instead of `#[serde(flatten)]`:
//! `serde_urlencoded` hands flattened fields over as strings, which breaks
//! numeric parsing.

use serde::Deserialize;
use vidhub_core::error::CoreError;
use vidhub_core::pagination::{self, Page};
use vidhub_core::types::DbId;

/// `?vid=` selector. A missing value is `0`, which never matches a video.
#[derive(Debug, Deserialize)]
pub struct VidQuery {
    #[serde(default)]
    pub vid: DbId,
}

/// Page-number pagination (`?page=&page_size=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> Result<Page, CoreError> {
        pagination::page(self.page, self.page_size)
    }
}

/// `GET /video/list` parameters. `partition` of `0` (or absent) lists all.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    #[serde(default)]
    pub partition: DbId,
}

impl ListParams {
    pub fn page(&self) -> Result<Page, CoreError> {
        pagination::page(self.page, self.page_size)
    }

    pub fn partition_filter(&self) -> Option<DbId> {
        (self.partition > 0).then_some(self.partition)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    #[serde(default)]
    pub keywords: String,
}

impl SearchParams {
    pub fn page(&self) -> Result<Page, CoreError> {
        pagination::page(self.page, self.page_size)
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub page_size: Option<i64>,
}

impl RecommendParams {
    pub fn limit(&self) -> Result<i64, CoreError> {
        Ok(pagination::page(None, self.page_size)?.limit)
    }
}

#[derive(Debug, Deserialize)]
pub struct UserVideosParams {
    #[serde(default)]
    pub uid: DbId,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl UserVideosParams {
    pub fn page(&self) -> Result<Page, CoreError> {
        pagination::page(self.page, self.page_size)
    }
}
