use crate::{
    application::shared::dto::PageQuery,
    domain::course::value_objects::{CourseFilter, split_csv},
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, de};
use ts_rs::TS;
use validator::Validate;

lazy_static! {
    static ref SKILL_TYPE_LIST: Regex =
        csv_pattern(&["listening", "reading", "writing", "speaking", "general"]);
    static ref LEVEL_LIST: Regex = csv_pattern(&["beginner", "intermediate", "advanced"]);
    static ref ENROLLMENT_TYPE_LIST: Regex = csv_pattern(&["free", "premium", "subscription"]);
}

/// Case-insensitive pattern accepting a comma-separated list of `values`.
/// A blank value means "no filter" and also matches.
fn csv_pattern(values: &[&str]) -> Regex {
    let item = format!(r"\s*({})\s*", values.join("|"));
    Regex::new(&format!(r"(?i)^(?:\s*|{item}(,{item})*,?)$")).unwrap()
}

/// `true`/`false`/`1`/`0` in any case; a blank value is treated as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        other => Err(de::Error::custom(format!(
            "is_featured must be true or false, got `{}`",
            other
        ))),
    }
}

/// Query string accepted by `GET /api/v1/courses`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CourseListQuery {
    #[validate(regex(path = *SKILL_TYPE_LIST, message = "unknown skill_type"))]
    pub skill_type: Option<String>,

    #[validate(regex(path = *LEVEL_LIST, message = "unknown level"))]
    pub level: Option<String>,

    #[validate(regex(path = *ENROLLMENT_TYPE_LIST, message = "unknown enrollment_type"))]
    pub enrollment_type: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub is_featured: Option<bool>,

    /// Matched case-insensitively against title and description
    #[validate(length(max = 200))]
    pub search: Option<String>,

    pub page: Option<String>,
    pub limit: Option<String>,
}

impl CourseListQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page.clone(),
            limit: self.limit.clone(),
        }
    }

    pub fn filter(&self) -> CourseFilter {
        CourseFilter {
            skill_types: split_csv(self.skill_type.as_deref()),
            levels: split_csv(self.level.as_deref()),
            enrollment_types: split_csv(self.enrollment_type.as_deref()),
            is_featured: self.is_featured,
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        }
    }
}
