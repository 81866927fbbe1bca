pub mod database;
pub mod memory;
pub mod store;

pub use database::MongoDb;
pub use memory::MemoryBlogStore;
pub use store::{BlogStore, MongoBlogStore};
