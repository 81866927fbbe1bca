use serde::{Deserialize, Serialize};

/// A blog post document.
///
/// Every field except the identifier is optional: the API accepts whatever
/// subset the client supplies and never fills in the rest. Absent fields are
/// omitted from the stored document rather than persisted as nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    /// Store identifier, assigned on creation. Unique and immutable.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cmt: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_like: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
