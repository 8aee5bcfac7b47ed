//! 进程级容器
//!
//! 容器默认由调用方持有；需要进程级访问时显式调用 [`init_global`] 安装，
//! 之后通过 [`global`] 获取。

use crate::container::{IocContainer, IocContainerBuilder};
use crate::settings::ContainerSettings;
use ioc_abstractions::Container;
use ioc_common::IocResult;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

static GLOBAL_CONTAINER: Lazy<RwLock<Option<Arc<IocContainer>>>> = Lazy::new(|| RwLock::new(None));

/// 构建、初始化并安装进程级容器
///
/// 已安装时直接返回现有容器，忽略传入的配置；初始化失败时不安装。
/// 初始化期间不持有全局锁，组件构造函数可以调用 [`global`]。
/// 并发的首次调用各自初始化，只有先完成的容器会被安装。
pub fn init_global(settings: ContainerSettings) -> IocResult<Arc<IocContainer>> {
    if let Some(container) = global() {
        debug!("进程级容器已安装: {}", container.namespace());
        return Ok(container);
    }

    let container = Arc::new(IocContainerBuilder::new().settings(settings).build()?);
    container.init()?;

    let mut slot = GLOBAL_CONTAINER.write();
    if let Some(existing) = slot.as_ref() {
        debug!(
            "进程级容器已由其他调用安装，丢弃新容器: {}",
            container.namespace()
        );
        return Ok(existing.clone());
    }
    info!("安装进程级容器: {}", container.namespace());
    *slot = Some(container.clone());
    Ok(container)
}

/// 获取进程级容器，未安装时返回 `None`
pub fn global() -> Option<Arc<IocContainer>> {
    GLOBAL_CONTAINER.read().clone()
}

/// 移除进程级容器，返回被移除的容器
pub fn reset_global() -> Option<Arc<IocContainer>> {
    let previous = GLOBAL_CONTAINER.write().take();
    if let Some(container) = &previous {
        info!("移除进程级容器: {}", container.namespace());
    }
    previous
}
