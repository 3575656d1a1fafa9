use crate::domain::shared::pagination::{PageLimits, PaginationParams};
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

/// Raw `page`/`limit` query values.
///
/// Kept as strings so a malformed value degrades to the default instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// Parsed values; missing or unparseable entries become 0.
    pub fn raw(&self) -> (i64, i64) {
        (parse_or_zero(self.page.as_deref()), parse_or_zero(self.limit.as_deref()))
    }

    pub fn resolve(&self, limits: &PageLimits) -> PaginationParams {
        let (page, limit) = self.raw();
        let params = limits.normalize(page, limit);
        if limit > limits.max_limit {
            warn!("List limit clamped from {} to {}", limit, params.limit);
        }
        params
    }
}

fn parse_or_zero(value: Option<&str>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}
