//! 单例注册表抽象接口

use ioc_common::{downcast_bean, BeanRef, TypeKey};
use std::any::Any;
use std::sync::Arc;

/// 单例注册表 trait
///
/// 具体类型标识到唯一实例的映射。条目在发现阶段写入，可以被
/// [`BeanRegistry::set_bean_ref`] 覆盖，但不会被删除。
pub trait BeanRegistry: Send + Sync {
    /// 获取实例
    fn get_bean_ref(&self, key: &TypeKey) -> Option<BeanRef>;

    /// 写入或覆盖实例，返回被覆盖的实例
    fn set_bean_ref(&self, key: TypeKey, bean: BeanRef) -> Option<BeanRef>;

    /// 检查是否已注册
    fn contains(&self, key: &TypeKey) -> bool;

    /// 所有已注册的类型，按类型名称排序
    fn keys(&self) -> Vec<TypeKey>;

    /// 所有条目的快照，按类型名称排序
    fn entries(&self) -> Vec<(TypeKey, BeanRef)>;

    /// 已注册实例数量
    fn len(&self) -> usize;

    /// 是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 注册表的类型化访问
pub trait BeanRegistryExt: BeanRegistry {
    /// 按具体类型获取实例，不存在时返回 `None`
    fn get_bean<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.get_bean_ref(&TypeKey::of::<T>())
            .and_then(downcast_bean::<T>)
    }

    /// 按具体类型写入或覆盖实例
    fn set_bean<T: Any + Send + Sync>(&self, instance: Arc<T>) {
        self.set_bean_ref(TypeKey::of::<T>(), instance);
    }
}

impl<R: BeanRegistry + ?Sized> BeanRegistryExt for R {}
