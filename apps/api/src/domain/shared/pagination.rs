//! Page/limit normalization and the `{data, pagination}` list envelope.
//!
//! Every list endpoint runs untrusted query values through [`normalize`],
//! queries the store with the resulting limit and offset, then wraps the rows
//! with [`build_envelope`]. All functions here are pure.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Items per page when the request omits `limit` or sends a value below 1.
pub const DEFAULT_LIMIT: i64 = 20;

/// Upper bound applied to any requested `limit`.
pub const MAX_LIMIT: i64 = 100;

/// Safe page/limit pair, produced by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaginationParams {
    pub page: i64,
    pub limit: i64,
}

impl PaginationParams {
    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Operator-configured limits for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub max_limit: i64,
    pub default_limit: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            max_limit: MAX_LIMIT,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl PageLimits {
    pub fn normalize(&self, page: i64, limit: i64) -> PaginationParams {
        let (page, limit) = normalize(page, limit, self.max_limit, self.default_limit);
        PaginationParams { page, limit }
    }
}

/// Clamp caller-supplied `page` and `limit` into a usable range.
///
/// `page` below 1 becomes 1 and is otherwise left alone: a page past the end
/// yields an empty slice downstream, not an error. `limit` below 1 falls back
/// to `default_limit`; above `max_limit` it is capped.
pub fn normalize(page: i64, limit: i64, max_limit: i64, default_limit: i64) -> (i64, i64) {
    let page = if page < 1 { 1 } else { page };

    let limit = if limit < 1 {
        default_limit
    } else if limit > max_limit {
        max_limit
    } else {
        limit
    };

    (page, limit)
}

/// Number of pages needed to hold `total_items` at `limit` per page.
///
/// Ceiling division; zero items gives zero pages. A non-positive `limit`
/// returns 1 instead of dividing.
pub fn page_count(total_items: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 1;
    }
    total_items.saturating_add(limit - 1) / limit
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// Envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, params: PaginationParams, total_items: i64) -> Self {
        build_envelope(data, params.page, params.limit, total_items)
    }
}

/// Pair `data` with freshly computed pagination metadata.
///
/// `data` is moved in as-is; its length is not checked against `total_items`.
pub fn build_envelope<T>(
    data: Vec<T>,
    page: i64,
    limit: i64,
    total_items: i64,
) -> PaginatedResponse<T> {
    PaginatedResponse {
        data,
        pagination: PaginationMeta {
            page,
            limit,
            total_items,
            total_pages: page_count(total_items, limit),
        },
    }
}
