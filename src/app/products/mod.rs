//! 产品资源：模型、集合存储与处理器

pub mod handler;
pub mod model;
pub mod service;

pub use model::{seed_records, Product};
pub use service::ProductService;
