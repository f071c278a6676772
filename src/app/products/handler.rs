//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::warn;

use super::service::ProductService;
use crate::core::error::CoreError;

/// GET /products
pub async fn list_products(State(service): State<ProductService>) -> Json<Vec<Value>> {
    Json(service.list())
}

/// POST /products
///
/// 请求体只要是合法 JSON 就会被原样存入集合并回显；
/// 解析失败时返回 4xx，状态码沿用 axum 的拒绝类型。
pub async fn create_product(
    State(service): State<ProductService>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), CoreError> {
    let Json(record) = payload.map_err(|rejection| {
        warn!("拒绝无效的请求体: {}", rejection.body_text());
        CoreError::from(rejection)
    })?;

    Ok((StatusCode::CREATED, Json(service.append(record))))
}
