//! 容器配置
//!
//! 从 `config/ioc.{toml,json,yaml}` 和 `IOC_` 前缀的环境变量加载。

use ioc_abstractions::ImplementorOrder;
use ioc_common::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

/// 容器配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    /// 扫描的命名空间（模块路径前缀）
    pub namespace: String,
    /// 多个实现类时的选择顺序
    pub implementor_order: ImplementorOrder,
}

impl ContainerSettings {
    /// 使用指定命名空间的默认配置
    pub fn for_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// 从默认配置文件和环境变量加载
    ///
    /// 配置文件可选；环境变量 `IOC_NAMESPACE`、`IOC_IMPLEMENTOR_ORDER` 覆盖文件中的值。
    pub fn load() -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/ioc").required(false))
            .add_source(config::Environment::with_prefix("IOC"))
            .build()
            .map_err(|e| {
                error!("容器配置构建失败: {}", e);
                ConfigError::ParseError { source: Box::new(e) }
            })?;

        Self::bind(settings)
    }

    /// 从指定文件加载，格式由扩展名决定
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| {
                error!("容器配置文件解析失败: {}, {}", path.display(), e);
                ConfigError::ParseError { source: Box::new(e) }
            })?;

        Self::bind(settings)
    }

    fn bind(settings: config::Config) -> ConfigResult<Self> {
        let bound: Self = settings.try_deserialize().map_err(|e| {
            error!("容器配置绑定失败: {}", e);
            ConfigError::ParseError { source: Box::new(e) }
        })?;
        bound.validate()?;
        debug!("容器配置加载成功: {:?}", bound);
        Ok(bound)
    }

    /// 校验命名空间格式
    ///
    /// 空命名空间合法（发现阶段为空操作）；否则每一段都必须是合法的标识符。
    pub fn validate(&self) -> ConfigResult<()> {
        let namespace = self.namespace.trim();
        if namespace.is_empty() {
            return Ok(());
        }

        let valid = namespace.split("::").all(|segment| {
            !segment.is_empty()
                && !segment.starts_with(|c: char| c.is_ascii_digit())
                && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
        });
        if valid {
            Ok(())
        } else {
            Err(ConfigError::ValidationError {
                message: format!("无效的命名空间: {}", self.namespace),
            })
        }
    }
}
