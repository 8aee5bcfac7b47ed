//! 类型扫描器实现
//!
//! 基于 [`TypeCatalog`] 的扫描器：命名空间按模块路径前缀匹配。

use ioc_abstractions::{ImplementorOrder, TypeScanner};
use ioc_common::{with_global_catalog, BoxError, TypeCatalog, TypeDescriptor, TypeKey};
use std::sync::Arc;
use tracing::debug;

/// 注册表来源
#[derive(Debug, Clone)]
enum CatalogSource {
    /// 进程级注册表，由宏生成的注册函数填充
    Global,
    /// 独立的注册表
    Owned(Arc<TypeCatalog>),
}

/// 基于类型注册表的扫描器
#[derive(Debug, Clone)]
pub struct CatalogScanner {
    source: CatalogSource,
    order: ImplementorOrder,
}

impl CatalogScanner {
    /// 使用进程级注册表
    pub fn global() -> Self {
        Self {
            source: CatalogSource::Global,
            order: ImplementorOrder::default(),
        }
    }

    /// 使用独立的注册表
    pub fn new(catalog: TypeCatalog) -> Self {
        Self {
            source: CatalogSource::Owned(Arc::new(catalog)),
            order: ImplementorOrder::default(),
        }
    }

    /// 设置实现类排序策略
    pub fn with_order(mut self, order: ImplementorOrder) -> Self {
        self.order = order;
        self
    }

    fn with_catalog<R>(&self, f: impl FnOnce(&TypeCatalog) -> R) -> R {
        match &self.source {
            CatalogSource::Global => with_global_catalog(f),
            CatalogSource::Owned(catalog) => f(catalog.as_ref()),
        }
    }
}

impl TypeScanner for CatalogScanner {
    fn name(&self) -> &str {
        match self.source {
            CatalogSource::Global => "GlobalCatalogScanner",
            CatalogSource::Owned(_) => "CatalogScanner",
        }
    }

    fn list(&self, namespace: &str) -> Result<Vec<TypeDescriptor>, BoxError> {
        let mut types = self.with_catalog(|catalog| catalog.types_in(namespace));
        self.order.sort(&mut types);
        debug!("扫描命名空间 {}: {} 个类型", namespace, types.len());
        Ok(types)
    }

    fn list_implementors(
        &self,
        namespace: &str,
        target: &TypeKey,
    ) -> Result<Vec<TypeDescriptor>, BoxError> {
        let mut implementors =
            self.with_catalog(|catalog| catalog.implementors_in(namespace, target));
        self.order.sort(&mut implementors);
        debug!(
            "扫描 {} 的实现类 (namespace: {}): {:?}",
            target,
            namespace,
            implementors
                .iter()
                .map(|descriptor| descriptor.key().name())
                .collect::<Vec<_>>()
        );
        Ok(implementors)
    }

    fn describe(&self, key: &TypeKey) -> Option<TypeDescriptor> {
        self.with_catalog(|catalog| catalog.describe(key))
    }

    fn interface_override(&self, interface: &TypeKey) -> Option<TypeKey> {
        self.with_catalog(|catalog| catalog.interface_override(interface))
    }
}
