//! 元数据定义
//!
//! 提供类型标识和可注册标记的元数据信息

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型标识
///
/// 注册表的键。相等性和哈希只取决于 `TypeId`，排序按类型名称，
/// 用于确定性的实现类选择。
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型标识，支持 `dyn Trait`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名称（包含模块路径）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// 类型所在的模块路径
    pub fn module_path(&self) -> &'static str {
        let name = self.name.strip_prefix("dyn ").unwrap_or(self.name);
        let base = name.split('<').next().unwrap_or(name);
        match base.rfind("::") {
            Some(index) => &base[..index],
            None => "",
        }
    }

    /// 是否为接口（trait 对象）类型
    pub fn is_interface(&self) -> bool {
        self.name.starts_with("dyn ")
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 可注册标记
///
/// 四种标记在发现阶段完全等价，只决定类型是否会被实例化。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stereotype {
    #[default]
    Component,
    Service,
    Repository,
    Controller,
}

impl Stereotype {
    /// 标记名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Stereotype::Component => "component",
            Stereotype::Service => "service",
            Stereotype::Repository => "repository",
            Stereotype::Controller => "controller",
        }
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 判断类型命名空间是否属于扫描命名空间
///
/// `app::services` 属于 `app` 和 `app::services`，但不属于 `app::serv`。
pub fn namespace_contains(scope: &str, namespace: &str) -> bool {
    let scope = scope.trim().trim_end_matches("::");
    namespace == scope
        || (namespace.len() > scope.len()
            && namespace.starts_with(scope)
            && namespace[scope.len()..].starts_with("::"))
}
