//! 产品集合存储

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use super::model::seed_records;

/// 进程内的产品集合
///
/// 所有读写都经过同一把互斥锁。克隆只复制句柄，多个克隆共享同一个集合。
#[derive(Clone)]
pub struct ProductService {
    products: Arc<Mutex<Vec<Value>>>,
}

impl ProductService {
    /// 创建带两条种子记录的集合
    pub fn new() -> Self {
        Self::with_records(seed_records())
    }

    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            products: Arc::new(Mutex::new(records)),
        }
    }

    /// 按插入顺序返回全部记录
    pub fn list(&self) -> Vec<Value> {
        self.lock().clone()
    }

    /// 追加一条记录并原样返回，不做任何校验
    pub fn append(&self, record: Value) -> Value {
        let mut products = self.lock();
        products.push(record.clone());
        tracing::debug!(total = products.len(), "产品已追加");
        record
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // push 不会让 Vec 处于中间状态，锁中毒后可以直接继续使用
    fn lock(&self) -> MutexGuard<'_, Vec<Value>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
