use crate::models::Blog;
use crate::services::BlogStore;
use async_trait::async_trait;
use mongodb::bson::{self, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-process store backend, selected via `STORE_BACKEND=memory`.
/// Used by the integration tests so they run without a MongoDB instance.
#[derive(Default)]
pub struct MemoryBlogStore {
    blogs: RwLock<BTreeMap<String, Blog>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn merge_into(blog: &Blog, changes: Document) -> Result<Blog, AppError> {
    let mut document = bson::to_document(blog)
        .map_err(|e| AppError::DatabaseError(anyhow::Error::new(e)))?;
    document.extend(changes);
    bson::from_document(document).map_err(|e| AppError::DatabaseError(anyhow::Error::new(e)))
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        Ok(self.blogs.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Blog>, AppError> {
        Ok(self.blogs.read().await.get(id).cloned())
    }

    async fn insert(&self, blog: &Blog) -> Result<(), AppError> {
        self.blogs
            .write()
            .await
            .insert(blog.id.clone(), blog.clone());
        Ok(())
    }

    async fn update_merge(
        &self,
        id: &str,
        changes: Document,
    ) -> Result<Option<Blog>, AppError> {
        let mut blogs = self.blogs.write().await;
        match blogs.get(id) {
            Some(existing) => {
                let merged = merge_into(existing, changes)?;
                blogs.insert(id.to_string(), merged.clone());
                Ok(Some(merged))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.blogs.write().await.remove(id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
