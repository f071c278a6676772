//! 应用层：路由与处理器

pub mod health;
pub mod products;

use std::time::Duration;

use axum::{http::Uri, middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::{error::CoreError, middleware::request_logging_middleware};
use products::{handler, ProductService};

/// 构建应用路由，集合通过 State 注入
pub fn create_router(service: ProductService) -> Router {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route("/health", get(health::health_check))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(service)
}

/// 在 [`create_router`] 的基础上加上请求超时
pub fn create_router_with_timeout(service: ProductService, timeout: Duration) -> Router {
    with_timeout(create_router(service), timeout)
}

/// 超时的请求返回 408
pub fn with_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(TimeoutLayer::new(timeout))
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("路径 {} 不存在", uri.path()))
}
