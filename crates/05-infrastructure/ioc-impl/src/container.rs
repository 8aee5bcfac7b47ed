//! IoC 容器门面实现

use crate::discovery::BeanDiscoveryImpl;
use crate::registry::BeanRegistryImpl;
use crate::resolver::DependencyResolverImpl;
use crate::scanner::CatalogScanner;
use crate::settings::ContainerSettings;
use ioc_abstractions::{
    BeanDiscovery, BeanRegistry, Container, ContainerState, DependencyResolver, Implementor,
    TypeScanner,
};
use ioc_common::{BeanRef, ErrorCode, InterfaceRef, IocError, IocResult, TypeCatalog, TypeKey};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// IoC 容器
///
/// 持有独立的单例注册表，`init()` 依次执行组件发现和依赖注入两个阶段。
pub struct IocContainer {
    namespace: String,
    scanner: Arc<dyn TypeScanner>,
    registry: BeanRegistryImpl,
    discovery: BeanDiscoveryImpl,
    resolver: DependencyResolverImpl,
    state: Mutex<ContainerState>,
}

impl IocContainer {
    /// 使用进程级类型注册表创建容器
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_scanner(namespace, Arc::new(CatalogScanner::global()))
    }

    /// 使用指定扫描器创建容器
    pub fn with_scanner(namespace: impl Into<String>, scanner: Arc<dyn TypeScanner>) -> Self {
        Self {
            namespace: namespace.into(),
            registry: BeanRegistryImpl::new(),
            discovery: BeanDiscoveryImpl::new(scanner.clone()),
            resolver: DependencyResolverImpl::new(scanner.clone()),
            scanner,
            state: Mutex::new(ContainerState::Uninitialized),
        }
    }

    /// 容器持有的单例注册表
    pub fn registry(&self) -> &BeanRegistryImpl {
        &self.registry
    }

    /// 容器使用的扫描器
    pub fn scanner(&self) -> &Arc<dyn TypeScanner> {
        &self.scanner
    }

    /// 只允许前向迁移，非法迁移被拒绝并保留当前状态
    fn transition(&self, next: ContainerState) -> bool {
        let mut state = self.state.lock();
        if !state.can_transition_to(next) {
            warn!("拒绝非法的容器状态迁移: {} -> {}", *state, next);
            return false;
        }
        debug!("容器状态迁移: {} -> {}", *state, next);
        *state = next;
        true
    }

    fn lookup_implementor(&self, interface: &TypeKey) -> Option<Implementor> {
        self.resolver
            .find_implementor(&self.namespace, interface, None)
            .unwrap_or_else(|e| {
                warn!("实现类查找失败，按未注册处理: {}, 原因: {}", interface, e);
                None
            })
    }

    fn fail(&self, error: IocError) -> IocError {
        error!("容器初始化失败: {}", error);
        self.transition(ContainerState::Failed);
        error
    }

    fn run_phases(&self) -> IocResult<()> {
        let discovered = self
            .discovery
            .discover(&self.namespace, &self.registry)
            .map_err(|e| {
                self.fail(IocError::wrap_with_code(
                    ErrorCode::Initialization,
                    format!("命名空间 {} 组件发现失败", self.namespace),
                    e,
                ))
            })?;
        debug!("组件发现结果: {:?}", discovered);

        self.transition(ContainerState::Wiring);
        let wired = self
            .resolver
            .resolve(&self.registry, &self.namespace)
            .map_err(|e| {
                self.fail(IocError::wrap_with_code(
                    e.error_code(),
                    format!("命名空间 {} 依赖注入失败", self.namespace),
                    e,
                ))
            })?;
        debug!("依赖注入结果: {:?}", wired);

        self.transition(ContainerState::Ready);
        Ok(())
    }
}

impl Container for IocContainer {
    fn init(&self) -> IocResult<()> {
        {
            let mut state = self.state.lock();
            match *state {
                ContainerState::Ready => {
                    debug!("容器已初始化，跳过: {}", self.namespace);
                    return Ok(());
                }
                current if current.can_transition_to(ContainerState::Discovering) => {
                    debug!("容器状态迁移: {} -> {}", current, ContainerState::Discovering);
                    *state = ContainerState::Discovering;
                }
                current => {
                    return Err(IocError::with_code(
                        ErrorCode::IllegalState,
                        format!("容器当前状态为 {}，无法初始化", current),
                    ));
                }
            }
        }

        info!("初始化容器: namespace={}", self.namespace);
        self.run_phases()?;
        info!(
            "容器初始化完成: namespace={}, 单例数量={}",
            self.namespace,
            self.registry.len()
        );
        Ok(())
    }

    fn state(&self) -> ContainerState {
        *self.state.lock()
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn get_bean_by_key(&self, key: &TypeKey) -> Option<BeanRef> {
        if let Some(bean) = self.registry.get_bean_ref(key) {
            return Some(bean);
        }
        if !key.is_interface() {
            return None;
        }

        let implementor = self.lookup_implementor(key)?;
        self.registry.get_bean_ref(&implementor.key)
    }

    fn resolve_interface(&self, interface: &TypeKey) -> Option<InterfaceRef> {
        let implementor = self.lookup_implementor(interface)?;
        let instance = self.registry.get_bean_ref(&implementor.key)?;
        implementor
            .descriptor
            .as_ref()
            .and_then(|descriptor| descriptor.binding_for(interface))
            .and_then(|binding| binding.upcast(instance))
    }

    fn set_bean_ref(&self, key: TypeKey, bean: BeanRef) {
        self.registry.set_bean_ref(key, bean);
    }
}

impl fmt::Debug for IocContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IocContainer")
            .field("namespace", &self.namespace)
            .field("scanner", &self.scanner.name())
            .field("state", &self.state())
            .field("registry", &self.registry)
            .finish()
    }
}

/// 容器构建器
///
/// 默认使用进程级类型注册表；命名空间未指定时取配置中的值。
#[derive(Default)]
pub struct IocContainerBuilder {
    namespace: Option<String>,
    settings: ContainerSettings,
    catalog: Option<TypeCatalog>,
    scanner: Option<Arc<dyn TypeScanner>>,
}

impl IocContainerBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置扫描的命名空间
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// 使用加载好的配置
    pub fn settings(mut self, settings: ContainerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 使用独立的类型注册表代替进程级注册表
    pub fn catalog(mut self, catalog: TypeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// 使用自定义扫描器，优先于 [`catalog`](Self::catalog)
    pub fn scanner(mut self, scanner: Arc<dyn TypeScanner>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// 构建容器
    pub fn build(self) -> IocResult<IocContainer> {
        let mut settings = self.settings;
        if let Some(namespace) = self.namespace {
            settings.namespace = namespace;
        }
        settings.validate()?;

        let order = settings.implementor_order;
        let scanner = match (self.scanner, self.catalog) {
            (Some(scanner), _) => scanner,
            (None, Some(catalog)) => Arc::new(CatalogScanner::new(catalog).with_order(order)),
            (None, None) => Arc::new(CatalogScanner::global().with_order(order)),
        };

        debug!(
            "构建容器: namespace={}, scanner={}, order={:?}",
            settings.namespace,
            scanner.name(),
            order
        );
        Ok(IocContainer::with_scanner(settings.namespace, scanner))
    }
}
