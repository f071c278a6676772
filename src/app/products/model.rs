//! 产品数据模型

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// 产品记录的常规形状
///
/// 集合中实际保存的是任意 JSON 值，客户端提交什么就存什么，
/// 这里不做任何约束。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// 进程启动时集合中的两条初始记录
pub fn seed_records() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Laptop", "price": 1200.00}),
        json!({"id": 2, "name": "Mouse", "price": 25.00}),
    ]
}
