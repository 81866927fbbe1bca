use crate::models::Blog;
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use service_core::error::AppError;

/// Document-store operations over the blogs collection.
///
/// Handlers hold an `Arc<dyn BlogStore>` so the backing store can be swapped
/// (MongoDB in deployment, in-memory in tests) without touching the HTTP
/// surface.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Fetch all blog documents in store-iteration order.
    async fn list(&self) -> Result<Vec<Blog>, AppError>;

    /// Fetch one blog by identifier, or `None` if absent.
    async fn get(&self, id: &str) -> Result<Option<Blog>, AppError>;

    /// Insert a new blog document.
    async fn insert(&self, blog: &Blog) -> Result<(), AppError>;

    /// Atomically merge `changes` onto the document with the given
    /// identifier and return the merged document, or `None` if absent.
    /// Keys in `changes` use stored field names.
    async fn update_merge(&self, id: &str, changes: Document)
        -> Result<Option<Blog>, AppError>;

    /// Delete the document with the given identifier. Returns whether a
    /// document was actually removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Liveness probe against the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct MongoBlogStore {
    db: MongoDb,
}

impl MongoBlogStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogStore for MongoBlogStore {
    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        let mut cursor = self
            .db
            .blogs()
            .find(None, None)
            .await
            .map_err(AppError::from)?;

        let mut blogs = Vec::new();
        while let Some(blog) = cursor.try_next().await.map_err(AppError::from)? {
            blogs.push(blog);
        }
        Ok(blogs)
    }

    async fn get(&self, id: &str) -> Result<Option<Blog>, AppError> {
        self.db
            .blogs()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(AppError::from)
    }

    async fn insert(&self, blog: &Blog) -> Result<(), AppError> {
        self.db
            .blogs()
            .insert_one(blog, None)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn update_merge(
        &self,
        id: &str,
        changes: Document,
    ) -> Result<Option<Blog>, AppError> {
        // MongoDB rejects an empty $set; a no-change merge is just a read.
        if changes.is_empty() {
            return self.get(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.db
            .blogs()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": changes }, options)
            .await
            .map_err(AppError::from)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self
            .db
            .blogs()
            .find_one_and_delete(doc! { "_id": id }, None)
            .await
            .map_err(AppError::from)?;
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
