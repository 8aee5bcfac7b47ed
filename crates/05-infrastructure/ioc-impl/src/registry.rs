//! 单例注册表实现

use ioc_abstractions::BeanRegistry;
use ioc_common::{BeanRef, TypeKey};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// 单例注册表实现
///
/// 由单个容器独占；读写通过 `RwLock` 串行化。
#[derive(Default)]
pub struct BeanRegistryImpl {
    beans: RwLock<HashMap<TypeKey, BeanRef>>,
}

impl BeanRegistryImpl {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self::default()
    }
}

impl BeanRegistry for BeanRegistryImpl {
    fn get_bean_ref(&self, key: &TypeKey) -> Option<BeanRef> {
        self.beans.read().get(key).cloned()
    }

    fn set_bean_ref(&self, key: TypeKey, bean: BeanRef) -> Option<BeanRef> {
        let previous = self.beans.write().insert(key, bean);
        if previous.is_some() {
            debug!("覆盖单例: {}", key);
        } else {
            debug!("注册单例: {}", key);
        }
        previous
    }

    fn contains(&self, key: &TypeKey) -> bool {
        self.beans.read().contains_key(key)
    }

    fn keys(&self) -> Vec<TypeKey> {
        let mut keys: Vec<TypeKey> = self.beans.read().keys().copied().collect();
        keys.sort();
        keys
    }

    fn entries(&self) -> Vec<(TypeKey, BeanRef)> {
        let mut entries: Vec<(TypeKey, BeanRef)> = self
            .beans
            .read()
            .iter()
            .map(|(key, bean)| (*key, bean.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    fn len(&self) -> usize {
        self.beans.read().len()
    }
}

impl fmt::Debug for BeanRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRegistryImpl")
            .field(
                "beans",
                &self.keys().iter().map(|key| key.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
