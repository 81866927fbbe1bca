use crate::models::Blog;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body accepted by the create endpoint: every blog field except the
/// identifier, all optional. Unknown keys are rejected at deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBlogRequest {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub photo: Option<String>,
    pub tag: Option<String>,
    pub content: Option<String>,
    pub total_cmt: Option<i64>,
    pub total_like: Option<i64>,
    pub post_date: Option<String>,
    pub state: Option<String>,
}

impl CreateBlogRequest {
    /// Materialize a new blog document with a freshly assigned identifier.
    pub fn into_blog(self) -> Blog {
        Blog {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id,
            title: self.title,
            photo: self.photo,
            tag: self.tag,
            content: self.content,
            total_cmt: self.total_cmt,
            total_like: self.total_like,
            post_date: self.post_date,
            state: self.state,
        }
    }
}

/// Body accepted by the update endpoint: any subset of the blog fields.
/// Only the keys present in the body take part in the merge.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBlogRequest {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub photo: Option<String>,
    pub tag: Option<String>,
    pub content: Option<String>,
    pub total_cmt: Option<i64>,
    pub total_like: Option<i64>,
    pub post_date: Option<String>,
    pub state: Option<String>,
}

impl UpdateBlogRequest {
    /// Build the set of changed fields, keyed by stored field name.
    pub fn into_update_document(self) -> Document {
        let mut changes = Document::new();
        if let Some(v) = self.user_id {
            changes.insert("user_id", v);
        }
        if let Some(v) = self.title {
            changes.insert("title", v);
        }
        if let Some(v) = self.photo {
            changes.insert("photo", v);
        }
        if let Some(v) = self.tag {
            changes.insert("tag", v);
        }
        if let Some(v) = self.content {
            changes.insert("content", v);
        }
        if let Some(v) = self.total_cmt {
            changes.insert("total_cmt", v);
        }
        if let Some(v) = self.total_like {
            changes.insert("total_like", v);
        }
        if let Some(v) = self.post_date {
            changes.insert("post_date", v);
        }
        if let Some(v) = self.state {
            changes.insert("state", v);
        }
        changes
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cmt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_like: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            post_id: blog.id,
            user_id: blog.user_id,
            title: blog.title,
            photo: blog.photo,
            tag: blog.tag,
            content: blog.content,
            total_cmt: blog.total_cmt,
            total_like: blog.total_like,
            post_date: blog.post_date,
            state: blog.state,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogResponse {
    pub message: String,
    pub post_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
