//! 组件发现抽象接口
//!
//! 第一阶段：扫描命名空间，实例化带可注册标记的类型并写入注册表

use crate::registry::BeanRegistry;
use ioc_common::DiscoveryResult;
use serde::Serialize;

/// 组件发现器 trait
pub trait BeanDiscovery: Send + Sync {
    /// 发现并实例化命名空间内的组件
    ///
    /// 命名空间为空时不做任何事；失败时已写入的实例保留在注册表中。
    fn discover(
        &self,
        namespace: &str,
        registry: &dyn BeanRegistry,
    ) -> DiscoveryResult<DiscoveryReport>;
}

/// 发现结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryReport {
    /// 扫描的命名空间
    pub namespace: String,
    /// 扫描到的类型数量
    pub scanned: usize,
    /// 已实例化的类型
    pub registered: Vec<String>,
    /// 没有可注册标记而跳过的类型
    pub skipped: Vec<String>,
}

impl DiscoveryReport {
    /// 创建新的发现结果
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// 已实例化的数量
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }
}
