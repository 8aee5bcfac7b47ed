//! 组件发现实现

use ioc_abstractions::{BeanDiscovery, BeanRegistry, DiscoveryReport, TypeScanner};
use ioc_common::{DiscoveryError, DiscoveryResult};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// 组件发现器实现
///
/// 扫描命名空间，为每个带可注册标记的类型调用无参构造函数并写入注册表。
pub struct BeanDiscoveryImpl {
    scanner: Arc<dyn TypeScanner>,
}

impl BeanDiscoveryImpl {
    /// 创建新的发现器
    pub fn new(scanner: Arc<dyn TypeScanner>) -> Self {
        Self { scanner }
    }
}

impl BeanDiscovery for BeanDiscoveryImpl {
    fn discover(
        &self,
        namespace: &str,
        registry: &dyn BeanRegistry,
    ) -> DiscoveryResult<DiscoveryReport> {
        let mut report = DiscoveryReport::new(namespace);
        if namespace.trim().is_empty() {
            warn!("命名空间为空，跳过组件发现");
            return Ok(report);
        }

        info!("开始发现组件: namespace={}, scanner={}", namespace, self.scanner.name());

        let types = self.scanner.list(namespace).map_err(|source| {
            error!("命名空间扫描失败: {}", namespace);
            DiscoveryError::ScanFailed {
                namespace: namespace.to_string(),
                source,
            }
        })?;
        report.scanned = types.len();

        for descriptor in types {
            let key = descriptor.key();
            if !descriptor.is_registerable() {
                debug!("跳过没有组件标记的类型: {}", key);
                report.skipped.push(key.name().to_string());
                continue;
            }

            // 失败时不回滚已写入注册表的实例
            let instance = match descriptor.instantiate() {
                Some(Ok(instance)) => instance,
                Some(Err(source)) => {
                    error!("组件实例化失败: {}, 原因: {}", key, source);
                    return Err(DiscoveryError::InstantiationFailed {
                        type_name: key.name().to_string(),
                        source,
                    });
                }
                None => {
                    error!("组件缺少无参构造函数: {}", key);
                    return Err(DiscoveryError::MissingConstructor {
                        type_name: key.name().to_string(),
                    });
                }
            };

            registry.set_bean_ref(key, instance);
            debug!(
                "注册组件: {} ({})",
                key,
                descriptor
                    .stereotype()
                    .map(|stereotype| stereotype.as_str())
                    .unwrap_or_default()
            );
            report.registered.push(key.name().to_string());
        }

        info!(
            "组件发现完成: namespace={}, 扫描 {} 个类型, 注册 {} 个组件",
            namespace,
            report.scanned,
            report.registered_count()
        );
        Ok(report)
    }
}
