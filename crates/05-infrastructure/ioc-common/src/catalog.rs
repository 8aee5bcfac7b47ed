//! 类型注册表
//!
//! 编译时可见的注册机制：类型通过构建器调用或宏生成的注册函数
//! 把自己的 [`TypeDescriptor`] 写入注册表，扫描器只读取注册表。

use crate::component::Bean;
use crate::descriptor::{InterfaceOverride, TypeDescriptor};
use crate::metadata::{namespace_contains, TypeKey};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// 类型注册表
///
/// 按注册顺序保存类型条目；同一类型重复注册时替换原条目并保留其位置。
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    descriptors: Vec<TypeDescriptor>,
    overrides: HashMap<TypeKey, TypeKey>,
}

impl TypeCatalog {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册可注册组件
    pub fn register<T: Bean>(&mut self) -> &mut Self {
        self.register_descriptor(T::descriptor())
    }

    /// 注册类型条目
    pub fn register_descriptor(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        debug!(
            "登记类型: {} (namespace: {}, stereotype: {:?})",
            descriptor.key(),
            descriptor.namespace(),
            descriptor.stereotype()
        );
        match self
            .descriptors
            .iter_mut()
            .find(|existing| existing.key() == descriptor.key())
        {
            Some(existing) => *existing = descriptor,
            None => self.descriptors.push(descriptor),
        }
        self
    }

    /// 为接口指定显式实现类
    pub fn bind_interface<I: ?Sized + 'static, P: 'static>(&mut self) -> &mut Self {
        self.register_override(InterfaceOverride::new::<I, P>())
    }

    /// 注册接口覆盖
    pub fn register_override(&mut self, binding: InterfaceOverride) -> &mut Self {
        debug!(
            "登记接口实现: {} -> {}",
            binding.interface, binding.implementation
        );
        self.overrides
            .insert(binding.interface, binding.implementation);
        self
    }

    /// 指定命名空间内的所有类型，按注册顺序
    pub fn types_in(&self, namespace: &str) -> Vec<TypeDescriptor> {
        self.descriptors
            .iter()
            .filter(|descriptor| namespace_contains(namespace, descriptor.namespace()))
            .cloned()
            .collect()
    }

    /// 指定命名空间内实现了目标类型的所有类型，按注册顺序
    pub fn implementors_in(&self, namespace: &str, target: &TypeKey) -> Vec<TypeDescriptor> {
        self.descriptors
            .iter()
            .filter(|descriptor| namespace_contains(namespace, descriptor.namespace()))
            .filter(|descriptor| descriptor.implements(target))
            .cloned()
            .collect()
    }

    /// 查找类型条目
    pub fn describe(&self, key: &TypeKey) -> Option<TypeDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.key() == *key)
            .cloned()
    }

    /// 接口的显式实现类
    pub fn interface_override(&self, interface: &TypeKey) -> Option<TypeKey> {
        self.overrides.get(interface).copied()
    }

    /// 已登记的类型数量
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// 全局类型注册表
static GLOBAL_TYPE_CATALOG: Lazy<RwLock<TypeCatalog>> =
    Lazy::new(|| RwLock::new(TypeCatalog::new()));

/// 获取全局类型注册表的快照
pub fn global_catalog() -> TypeCatalog {
    GLOBAL_TYPE_CATALOG.read().clone()
}

/// 在全局类型注册表上执行只读操作
pub fn with_global_catalog<R>(f: impl FnOnce(&TypeCatalog) -> R) -> R {
    let catalog = GLOBAL_TYPE_CATALOG.read();
    f(&*catalog)
}

/// 把类型条目写入全局注册表，由 `#[derive(Bean)]` 生成的代码调用
pub fn submit_type(descriptor: TypeDescriptor) {
    GLOBAL_TYPE_CATALOG.write().register_descriptor(descriptor);
}

/// 把接口覆盖写入全局注册表，由 `#[interface]` 生成的代码调用
pub fn submit_override(binding: InterfaceOverride) {
    GLOBAL_TYPE_CATALOG.write().register_override(binding);
}
