//! # 产品列表 HTTP 服务
//!
//! 进程内保存一份有序的产品集合，通过 HTTP 提供：
//! - `GET /products` 列出全部记录
//! - `POST /products` 原样追加一条 JSON 记录
//! - `GET /health` 存活检查
//!
//! 数据不持久化，重启后回到两条种子记录。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{create_router, create_router_with_timeout};
pub use app::products::{Product, ProductService};
pub use config::{Config, ConfigError};
pub use crate::core::error::CoreError;
