//! 注入标记字段
//!
//! [`Inject`] 是字段级的注入标记：容器在注入阶段把解析出的实例写入其中。

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// 可注入字段
///
/// 实例以 `Arc` 共享，所以注入通过内部可变性完成；重复注入会覆盖原值。
pub struct Inject<T: ?Sized + Send + Sync + 'static> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized + Send + Sync + 'static> Inject<T> {
    /// 创建未注入的字段
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// 创建已注入的字段
    pub fn with(value: Arc<T>) -> Self {
        Self {
            slot: RwLock::new(Some(value)),
        }
    }

    /// 获取注入的实例，未注入时返回 `None`
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.read().clone()
    }

    /// 写入实例
    pub fn set(&self, value: Arc<T>) {
        *self.slot.write() = Some(value);
    }

    /// 是否已注入
    pub fn is_wired(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl<T: ?Sized + Send + Sync + 'static> Default for Inject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Send + Sync + 'static> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("target", &std::any::type_name::<T>())
            .field("wired", &self.is_wired())
            .finish()
    }
}
