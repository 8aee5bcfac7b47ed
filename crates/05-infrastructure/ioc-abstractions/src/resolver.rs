//! 依赖解析器抽象接口
//!
//! 第二阶段：为注册表中的每个实例解析并注入依赖

use crate::registry::BeanRegistry;
use ioc_common::{DependencyResult, TypeDescriptor, TypeKey};
use serde::Serialize;

/// 依赖解析器 trait
pub trait DependencyResolver: Send + Sync {
    /// 为注册表中所有实例注入依赖
    ///
    /// 遇到第一个无法满足的依赖立即返回错误，之前已注入的字段保持不变。
    fn resolve(
        &self,
        registry: &dyn BeanRegistry,
        namespace: &str,
    ) -> DependencyResult<WiringReport>;

    /// 为目标类型选择实现类
    ///
    /// 优先使用字段上的显式实现，其次是接口上的显式实现，最后取扫描结果的第一个。
    fn find_implementor(
        &self,
        namespace: &str,
        target: &TypeKey,
        explicit: Option<TypeKey>,
    ) -> DependencyResult<Option<Implementor>>;
}

/// 实现类的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplementorSource {
    /// 字段上的显式实现
    Field,
    /// 接口上的显式实现
    Interface,
    /// 扫描结果
    Scanned,
}

/// 选中的实现类
#[derive(Debug, Clone)]
pub struct Implementor {
    /// 实现类标识
    pub key: TypeKey,
    /// 实现类条目，扫描器不认识该类型时为 `None`
    pub descriptor: Option<TypeDescriptor>,
    /// 来源
    pub source: ImplementorSource,
}

/// 已注入的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiredField {
    pub owner: String,
    pub field: String,
    pub implementor: String,
    pub source: ImplementorSource,
}

/// 因找不到实现类而跳过的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedField {
    pub owner: String,
    pub field: String,
    pub target: String,
}

/// 注入结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WiringReport {
    /// 访问过的实例数量
    pub visited: usize,
    /// 已注入的字段
    pub wired: Vec<WiredField>,
    /// 跳过的字段
    pub skipped: Vec<SkippedField>,
}
