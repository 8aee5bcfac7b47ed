//! IoC 容器抽象接口
//!
//! 提供容器门面的核心抽象

use ioc_common::{downcast_bean, BeanRef, InterfaceRef, IocResult, TypeKey};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 容器状态
///
/// `Uninitialized -> Discovering -> Wiring -> Ready`，发现或注入阶段失败时进入 `Failed`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerState {
    Uninitialized,
    Discovering,
    Wiring,
    Ready,
    Failed,
}

impl ContainerState {
    /// 是否允许迁移到目标状态
    pub fn can_transition_to(&self, next: ContainerState) -> bool {
        matches!(
            (self, next),
            (ContainerState::Uninitialized, ContainerState::Discovering)
                | (ContainerState::Discovering, ContainerState::Wiring)
                | (ContainerState::Discovering, ContainerState::Failed)
                | (ContainerState::Wiring, ContainerState::Ready)
                | (ContainerState::Wiring, ContainerState::Failed)
        )
    }

    /// 状态名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerState::Uninitialized => "uninitialized",
            ContainerState::Discovering => "discovering",
            ContainerState::Wiring => "wiring",
            ContainerState::Ready => "ready",
            ContainerState::Failed => "failed",
        }
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// IoC 容器 trait
pub trait Container: Send + Sync {
    /// 依次执行组件发现和依赖注入
    fn init(&self) -> IocResult<()>;

    /// 当前状态
    fn state(&self) -> ContainerState;

    /// 扫描的命名空间
    fn namespace(&self) -> &str;

    /// 按类型标识获取实例
    ///
    /// 接口类型先选出实现类，再按实现类查找；找不到时返回 `None`。
    fn get_bean_by_key(&self, key: &TypeKey) -> Option<BeanRef>;

    /// 按接口获取已转型的实例
    fn resolve_interface(&self, interface: &TypeKey) -> Option<InterfaceRef>;

    /// 无条件写入或覆盖实例，与容器状态无关
    fn set_bean_ref(&self, key: TypeKey, bean: BeanRef);
}

/// 容器的类型化访问
pub trait ContainerExt: Container {
    /// 按具体类型获取实例
    fn get_bean<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.get_bean_by_key(&TypeKey::of::<T>())
            .and_then(downcast_bean::<T>)
    }

    /// 按接口获取实例，例如 `get_interface::<dyn Notifier>()`
    fn get_interface<I: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<I>> {
        self.resolve_interface(&TypeKey::of::<I>())
            .and_then(|instance| instance.downcast::<Arc<I>>().ok())
            .map(|instance| *instance)
    }

    /// 按具体类型写入或覆盖实例
    fn set_bean<T: Any + Send + Sync>(&self, instance: Arc<T>) {
        self.set_bean_ref(TypeKey::of::<T>(), instance);
    }
}

impl<C: Container + ?Sized> ContainerExt for C {}
