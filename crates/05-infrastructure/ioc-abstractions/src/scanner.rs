//! 类型扫描器抽象接口
//!
//! 提供按命名空间列出类型和实现类的能力

use ioc_common::{BoxError, TypeDescriptor, TypeKey};
use serde::{Deserialize, Serialize};

/// 类型扫描器 trait
///
/// 返回顺序由扫描器决定，调用方只依赖“第一个实现类”这一规则。
pub trait TypeScanner: Send + Sync {
    /// 获取扫描器名称
    fn name(&self) -> &str;

    /// 列出命名空间内的所有类型
    fn list(&self, namespace: &str) -> Result<Vec<TypeDescriptor>, BoxError>;

    /// 列出命名空间内实现了目标类型的所有类型
    fn list_implementors(
        &self,
        namespace: &str,
        target: &TypeKey,
    ) -> Result<Vec<TypeDescriptor>, BoxError>;

    /// 查找类型条目
    fn describe(&self, key: &TypeKey) -> Option<TypeDescriptor>;

    /// 接口自身携带的显式实现类
    fn interface_override(&self, _interface: &TypeKey) -> Option<TypeKey> {
        None
    }
}

/// 多个实现类时的排序策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplementorOrder {
    /// 按类型名称字典序
    #[default]
    Lexicographic,
    /// 按注册顺序
    Registration,
}

impl ImplementorOrder {
    /// 按策略对类型条目排序
    pub fn sort(&self, descriptors: &mut [TypeDescriptor]) {
        match self {
            ImplementorOrder::Lexicographic => {
                descriptors.sort_by(|a, b| a.key().cmp(&b.key()));
            }
            ImplementorOrder::Registration => {}
        }
    }
}
