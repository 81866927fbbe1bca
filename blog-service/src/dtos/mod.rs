pub mod blogs;

pub use blogs::{
    BlogResponse, CreateBlogRequest, CreateBlogResponse, MessageResponse, UpdateBlogRequest,
};
