use serde::{Deserialize, Serialize};

/// Filters for the published-course listing.
///
/// Values inside one list are OR-ed; the lists themselves are AND-ed.
/// An empty list leaves that column unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFilter {
    pub skill_types: Vec<String>,
    pub levels: Vec<String>,
    pub enrollment_types: Vec<String>,
    pub is_featured: Option<bool>,
    pub search: Option<String>,
}

impl CourseFilter {
    pub fn is_empty(&self) -> bool {
        self.skill_types.is_empty()
            && self.levels.is_empty()
            && self.enrollment_types.is_empty()
            && self.is_featured.is_none()
            && self.search.is_none()
    }
}

/// Split a comma-separated query value into trimmed, non-empty items.
pub fn split_csv(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_lowercase)
            .collect()
    })
    .unwrap_or_default()
}
