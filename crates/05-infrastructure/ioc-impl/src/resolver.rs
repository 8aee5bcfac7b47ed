//! 依赖解析器实现

use ioc_abstractions::{
    BeanRegistry, DependencyResolver, Implementor, ImplementorSource, SkippedField, TypeScanner,
    WiredField, WiringReport,
};
use ioc_common::{BeanRef, DependencyError, DependencyResult, InjectionPoint, TypeKey};
use std::sync::Arc;
use tracing::{debug, error, info};

/// 依赖解析器实现
///
/// 遍历注册表中的每个实例，按注入点声明为字段选择实现类并写入实例。
pub struct DependencyResolverImpl {
    scanner: Arc<dyn TypeScanner>,
}

impl DependencyResolverImpl {
    /// 创建新的解析器
    pub fn new(scanner: Arc<dyn TypeScanner>) -> Self {
        Self { scanner }
    }

    /// 为单个注入点解析并注入依赖，找不到实现类时返回 `Ok(None)`
    fn wire_field(
        &self,
        registry: &dyn BeanRegistry,
        namespace: &str,
        owner: &BeanRef,
        point: &InjectionPoint,
    ) -> DependencyResult<Option<Implementor>> {
        let target = point.target();
        let implementor =
            match self.find_implementor(namespace, &target, point.implementation())? {
                Some(implementor) => implementor,
                None => return Ok(None),
            };

        let instance = registry.get_bean_ref(&implementor.key).ok_or_else(|| {
            error!(
                "依赖注入失败, 类型: {}, 字段: {}, 实现类未注册: {}",
                point.owner(),
                point.field(),
                implementor.key
            );
            DependencyError::ImplementorNotRegistered {
                owner: point.owner().name().to_string(),
                field: point.field().to_string(),
                implementor: implementor.key.name().to_string(),
            }
        })?;

        let wiring_failed = |message: String| {
            error!(
                "字段注入失败, 类型: {}, 字段: {}, 原因: {}",
                point.owner(),
                point.field(),
                message
            );
            DependencyError::WiringFailed {
                owner: point.owner().name().to_string(),
                field: point.field().to_string(),
                message,
            }
        };

        let binding = implementor
            .descriptor
            .as_ref()
            .and_then(|descriptor| descriptor.binding_for(&target))
            .ok_or_else(|| wiring_failed(format!("{} 没有实现 {}", implementor.key, target)))?;
        let dependency = binding
            .upcast(instance)
            .ok_or_else(|| wiring_failed(format!("{} 的实例类型不匹配", implementor.key)))?;
        point
            .assign(&**owner, dependency)
            .map_err(wiring_failed)?;

        Ok(Some(implementor))
    }
}

impl DependencyResolver for DependencyResolverImpl {
    fn resolve(
        &self,
        registry: &dyn BeanRegistry,
        namespace: &str,
    ) -> DependencyResult<WiringReport> {
        info!("开始注入依赖: namespace={}, 实例数量={}", namespace, registry.len());
        let mut report = WiringReport::default();

        for (key, owner) in registry.entries() {
            report.visited += 1;
            let Some(descriptor) = self.scanner.describe(&key) else {
                debug!("类型没有注册条目，跳过注入: {}", key);
                continue;
            };

            for point in descriptor.injection_points() {
                match self.wire_field(registry, namespace, &owner, point)? {
                    Some(implementor) => {
                        debug!(
                            "注入字段: {}.{} <- {} ({:?})",
                            key,
                            point.field(),
                            implementor.key,
                            implementor.source
                        );
                        report.wired.push(WiredField {
                            owner: key.name().to_string(),
                            field: point.field().to_string(),
                            implementor: implementor.key.name().to_string(),
                            source: implementor.source,
                        });
                    }
                    None => {
                        debug!(
                            "未找到实现类，字段保持未注入: {}.{} ({})",
                            key,
                            point.field(),
                            point.target()
                        );
                        report.skipped.push(SkippedField {
                            owner: key.name().to_string(),
                            field: point.field().to_string(),
                            target: point.target().name().to_string(),
                        });
                    }
                }
            }
        }

        info!(
            "依赖注入完成: 访问 {} 个实例, 注入 {} 个字段, 跳过 {} 个字段",
            report.visited,
            report.wired.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    fn find_implementor(
        &self,
        namespace: &str,
        target: &TypeKey,
        explicit: Option<TypeKey>,
    ) -> DependencyResult<Option<Implementor>> {
        let overridden = explicit
            .map(|key| (key, ImplementorSource::Field))
            .or_else(|| {
                self.scanner
                    .interface_override(target)
                    .map(|key| (key, ImplementorSource::Interface))
            });
        if let Some((key, source)) = overridden {
            return Ok(Some(Implementor {
                key,
                descriptor: self.scanner.describe(&key),
                source,
            }));
        }

        let implementors = self
            .scanner
            .list_implementors(namespace, target)
            .map_err(|source| {
                error!("实现类查找失败: {}", target);
                DependencyError::ImplementorLookupFailed {
                    target: target.name().to_string(),
                    source,
                }
            })?;

        Ok(implementors.into_iter().next().map(|descriptor| Implementor {
            key: descriptor.key(),
            descriptor: Some(descriptor),
            source: ImplementorSource::Scanned,
        }))
    }
}
