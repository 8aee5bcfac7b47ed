//! Centralized integration tests for ioc-impl crate

use ioc_abstractions::{
    BeanDiscovery, BeanRegistry, BeanRegistryExt, Container, ContainerExt, ContainerState,
    DependencyResolver, ImplementorOrder, ImplementorSource, TypeScanner,
};
use ioc_common::{
    implements, Bean, BoxError, DiscoveryError, ErrorCode, Inject, InjectionPoint,
    InterfaceBinding, Stereotype, TypeCatalog, TypeDescriptor, TypeKey,
};
use ioc_impl::{
    BeanDiscoveryImpl, BeanRegistryImpl, CatalogScanner, ContainerSettings, DependencyResolverImpl,
    IocContainerBuilder,
};
use std::io::Write;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// 三层组件：仓储 -> 服务 -> 控制器

pub trait OrderRepository: Send + Sync {
    fn find(&self, id: u32) -> Option<String>;
}

pub trait OrderService: Send + Sync {
    fn describe(&self, id: u32) -> String;
}

#[derive(Default)]
pub struct InMemoryOrderRepository;

impl OrderRepository for InMemoryOrderRepository {
    fn find(&self, id: u32) -> Option<String> {
        (id == 7).then(|| "espresso".to_string())
    }
}

impl Bean for InMemoryOrderRepository {
    fn create() -> Result<Self, BoxError> {
        Ok(Self)
    }
    fn stereotype() -> Stereotype {
        Stereotype::Repository
    }
    fn namespace() -> &'static str {
        "shop::orders::storage"
    }
    fn interfaces() -> Vec<InterfaceBinding> {
        vec![implements!(InMemoryOrderRepository => dyn OrderRepository)]
    }
}

#[derive(Default)]
pub struct DefaultOrderService {
    repository: Inject<dyn OrderRepository>,
}

impl OrderService for DefaultOrderService {
    fn describe(&self, id: u32) -> String {
        self.repository
            .get()
            .and_then(|repository| repository.find(id))
            .unwrap_or_else(|| "unknown".to_string())
    }
}

impl Bean for DefaultOrderService {
    fn create() -> Result<Self, BoxError> {
        Ok(Self::default())
    }
    fn stereotype() -> Stereotype {
        Stereotype::Service
    }
    fn namespace() -> &'static str {
        "shop::orders"
    }
    fn interfaces() -> Vec<InterfaceBinding> {
        vec![implements!(DefaultOrderService => dyn OrderService)]
    }
    fn injection_points() -> Vec<InjectionPoint> {
        vec![InjectionPoint::new::<Self, dyn OrderRepository>(
            "repository",
            |s| &s.repository,
        )]
    }
}

#[derive(Default)]
pub struct OrderController {
    service: Inject<dyn OrderService>,
}

impl OrderController {
    fn show(&self, id: u32) -> String {
        match self.service.get() {
            Some(service) => format!("order {id}: {}", service.describe(id)),
            None => "service unavailable".to_string(),
        }
    }
}

impl Bean for OrderController {
    fn create() -> Result<Self, BoxError> {
        Ok(Self::default())
    }
    fn stereotype() -> Stereotype {
        Stereotype::Controller
    }
    fn namespace() -> &'static str {
        "shop::web"
    }
    fn injection_points() -> Vec<InjectionPoint> {
        vec![InjectionPoint::new::<Self, dyn OrderService>("service", |s| &s.service)]
    }
}

/// 位于其他命名空间的组件，不应被 `shop` 容器发现
#[derive(Default)]
pub struct WarehouseJob;

impl Bean for WarehouseJob {
    fn create() -> Result<Self, BoxError> {
        Ok(Self)
    }
    fn namespace() -> &'static str {
        "warehouse"
    }
}

fn shop_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    catalog
        .register::<OrderController>()
        .register::<DefaultOrderService>()
        .register::<InMemoryOrderRepository>()
        .register::<WarehouseJob>();
    catalog
}

#[test]
fn test_layered_components_are_wired() -> anyhow::Result<()> {
    init_tracing();
    let container = IocContainerBuilder::new()
        .namespace("shop")
        .catalog(shop_catalog())
        .build()?;
    container.init()?;

    assert_eq!(container.state(), ContainerState::Ready);
    let controller = container
        .get_bean::<OrderController>()
        .ok_or_else(|| anyhow::anyhow!("controller not registered"))?;
    assert_eq!(controller.show(7), "order 7: espresso");
    assert_eq!(controller.show(8), "order 8: unknown");

    assert!(container.get_bean::<WarehouseJob>().is_none());
    assert_eq!(container.registry().len(), 3);
    Ok(())
}

#[test]
fn test_sub_namespace_limits_discovery() -> anyhow::Result<()> {
    let container = IocContainerBuilder::new()
        .namespace("shop::orders")
        .catalog(shop_catalog())
        .build()?;
    container.init()?;

    assert!(container.get_bean::<OrderController>().is_none());
    let service = container
        .get_interface::<dyn OrderService>()
        .ok_or_else(|| anyhow::anyhow!("service not registered"))?;
    assert_eq!(service.describe(7), "espresso");
    Ok(())
}

#[test]
fn test_pipeline_without_container() {
    let scanner: Arc<dyn TypeScanner> = Arc::new(CatalogScanner::new(shop_catalog()));
    let registry = BeanRegistryImpl::new();

    let discovered = BeanDiscoveryImpl::new(scanner.clone())
        .discover("shop", &registry)
        .unwrap();
    assert_eq!(discovered.registered_count(), 3);

    let resolver = DependencyResolverImpl::new(scanner);
    let report = resolver.resolve(&registry, "shop").unwrap();
    assert_eq!(report.visited, 3);
    assert_eq!(report.wired.len(), 2);
    assert!(report
        .wired
        .iter()
        .all(|field| field.source == ImplementorSource::Scanned));
    assert!(report.skipped.is_empty());

    let controller = registry.get_bean::<OrderController>().unwrap();
    assert_eq!(controller.show(7), "order 7: espresso");
}

#[test]
fn test_field_override_through_container() -> anyhow::Result<()> {
    #[derive(Default)]
    pub struct CachedOrderRepository;
    impl OrderRepository for CachedOrderRepository {
        fn find(&self, _id: u32) -> Option<String> {
            Some("cached".to_string())
        }
    }
    impl Bean for CachedOrderRepository {
        fn create() -> Result<Self, BoxError> {
            Ok(Self)
        }
        fn namespace() -> &'static str {
            "shop::orders::cache"
        }
        fn interfaces() -> Vec<InterfaceBinding> {
            vec![implements!(CachedOrderRepository => dyn OrderRepository)]
        }
    }

    // 替换服务的类型条目，为 repository 字段指定实现类
    let overridden = TypeDescriptor::plain::<DefaultOrderService>()
        .in_namespace(DefaultOrderService::namespace())
        .with_stereotype(Stereotype::Service)
        .with_constructor(|| Ok(Arc::new(DefaultOrderService::default()) as ioc_common::BeanRef))
        .with_binding(implements!(DefaultOrderService => dyn OrderService))
        .with_injection_point(
            InjectionPoint::new::<DefaultOrderService, dyn OrderRepository>(
                "repository",
                |s| &s.repository,
            )
            .with_implementation(TypeKey::of::<CachedOrderRepository>()),
        );
    let mut catalog = shop_catalog();
    catalog
        .register::<CachedOrderRepository>()
        .register_descriptor(overridden);

    let container = IocContainerBuilder::new()
        .namespace("shop")
        .catalog(catalog)
        .build()?;
    container.init()?;

    let service = container
        .get_bean::<DefaultOrderService>()
        .ok_or_else(|| anyhow::anyhow!("service not registered"))?;
    assert_eq!(service.describe(1), "cached");
    let controller = container
        .get_bean::<OrderController>()
        .ok_or_else(|| anyhow::anyhow!("controller not registered"))?;
    assert_eq!(controller.show(1), "order 1: cached");
    Ok(())
}

/// 每次扫描都失败的扫描器
struct OfflineScanner;

impl TypeScanner for OfflineScanner {
    fn name(&self) -> &str {
        "OfflineScanner"
    }

    fn list(&self, namespace: &str) -> Result<Vec<TypeDescriptor>, BoxError> {
        Err(format!("index for {namespace} is offline").into())
    }

    fn list_implementors(
        &self,
        _namespace: &str,
        _target: &TypeKey,
    ) -> Result<Vec<TypeDescriptor>, BoxError> {
        Ok(Vec::new())
    }

    fn describe(&self, _key: &TypeKey) -> Option<TypeDescriptor> {
        None
    }
}

#[test]
fn test_custom_scanner_failure_surfaces_as_init_error() {
    let container = IocContainerBuilder::new()
        .namespace("shop")
        .scanner(Arc::new(OfflineScanner))
        .build()
        .unwrap();

    let error = container.init().unwrap_err();
    assert_eq!(error.code(), Some(ErrorCode::Initialization));
    assert!(error.to_string().contains("IOC-INIT"));
    match error.cause_as::<DiscoveryError>() {
        Some(DiscoveryError::ScanFailed { namespace, source }) => {
            assert_eq!(namespace, "shop");
            assert_eq!(source.to_string(), "index for shop is offline");
        }
        other => panic!("unexpected cause: {:?}", other),
    }
    assert_eq!(container.state(), ContainerState::Failed);
}

#[test]
fn test_settings_file_drives_builder() -> anyhow::Result<()> {
    pub trait Clock: Send + Sync {
        fn zone(&self) -> &'static str;
    }

    #[derive(Default)]
    pub struct UtcClock;
    impl Clock for UtcClock {
        fn zone(&self) -> &'static str {
            "utc"
        }
    }

    #[derive(Default)]
    pub struct LocalClock;
    impl Clock for LocalClock {
        fn zone(&self) -> &'static str {
            "local"
        }
    }

    let mut catalog = TypeCatalog::new();
    catalog
        .register_descriptor(
            TypeDescriptor::plain::<UtcClock>()
                .in_namespace("time")
                .with_stereotype(Stereotype::Component)
                .with_constructor(|| Ok(Arc::new(UtcClock) as ioc_common::BeanRef))
                .with_binding(implements!(UtcClock => dyn Clock)),
        )
        .register_descriptor(
            TypeDescriptor::plain::<LocalClock>()
                .in_namespace("time")
                .with_stereotype(Stereotype::Component)
                .with_constructor(|| Ok(Arc::new(LocalClock) as ioc_common::BeanRef))
                .with_binding(implements!(LocalClock => dyn Clock)),
        );

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "namespace = \"time\"")?;
    writeln!(file, "implementor_order = \"registration\"")?;
    file.flush()?;

    let settings = ContainerSettings::from_file(file.path())?;
    assert_eq!(settings.implementor_order, ImplementorOrder::Registration);

    let container = IocContainerBuilder::new()
        .settings(settings)
        .catalog(catalog.clone())
        .build()?;
    container.init()?;
    let clock = container
        .get_interface::<dyn Clock>()
        .ok_or_else(|| anyhow::anyhow!("clock not registered"))?;
    assert_eq!(clock.zone(), "utc");

    let lexicographic = IocContainerBuilder::new()
        .namespace("time")
        .catalog(catalog)
        .build()?;
    lexicographic.init()?;
    let clock = lexicographic
        .get_interface::<dyn Clock>()
        .ok_or_else(|| anyhow::anyhow!("clock not registered"))?;
    assert_eq!(clock.zone(), "local");
    Ok(())
}

#[test]
fn test_registry_survives_partial_discovery() {
    #[derive(Debug)]
    pub struct FlakyService;
    impl Bean for FlakyService {
        fn create() -> Result<Self, BoxError> {
            Err("dependency not ready".into())
        }
        fn namespace() -> &'static str {
            "shop::web"
        }
    }

    let mut catalog = shop_catalog();
    catalog.register::<FlakyService>();
    let container = IocContainerBuilder::new()
        .namespace("shop")
        .settings(ContainerSettings {
            namespace: String::new(),
            implementor_order: ImplementorOrder::Registration,
        })
        .catalog(catalog)
        .build()
        .unwrap();

    assert!(container.init().is_err());
    // 失败前已创建的实例保留在注册表中
    assert_eq!(container.registry().len(), 3);
    assert!(container
        .registry()
        .contains(&TypeKey::of::<InMemoryOrderRepository>()));
    assert!(container.get_bean::<FlakyService>().is_none());
}
