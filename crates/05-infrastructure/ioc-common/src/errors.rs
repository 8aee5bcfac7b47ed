//! 错误类型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 装箱的动态错误，用于包装扫描器和构造函数返回的底层原因
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 组件发现错误类型（初始化错误）
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("命名空间扫描失败: {namespace}, 原因: {source}")]
    ScanFailed { namespace: String, source: BoxError },

    #[error("组件实例化失败: {type_name}, 原因: {source}")]
    InstantiationFailed { type_name: String, source: BoxError },

    #[error("可注册类型缺少无参构造函数: {type_name}")]
    MissingConstructor { type_name: String },
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("依赖未注册: {owner}.{field} 需要 {implementor}, 但注册表中不存在该实例")]
    ImplementorNotRegistered {
        owner: String,
        field: String,
        implementor: String,
    },

    #[error("实现类查找失败: {target}, 原因: {source}")]
    ImplementorLookupFailed { target: String, source: BoxError },

    #[error("字段注入失败: {owner}.{field}, 原因: {message}")]
    WiringFailed {
        owner: String,
        field: String,
        message: String,
    },
}

impl DependencyError {
    /// 对应的错误码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            DependencyError::WiringFailed { .. } => ErrorCode::Wiring,
            DependencyError::ImplementorNotRegistered { .. }
            | DependencyError::ImplementorLookupFailed { .. } => ErrorCode::DependencyResolution,
        }
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError { source: BoxError },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 机器可读的错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// 发现阶段失败
    Initialization,
    /// 实现类已找到但没有对应实例
    DependencyResolution,
    /// 字段赋值失败
    Wiring,
    /// 容器状态不允许当前操作
    IllegalState,
    /// 配置加载失败
    Configuration,
}

impl ErrorCode {
    /// 错误码字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Initialization => "IOC-INIT",
            ErrorCode::DependencyResolution => "IOC-DEPENDENCY",
            ErrorCode::Wiring => "IOC-WIRING",
            ErrorCode::IllegalState => "IOC-STATE",
            ErrorCode::Configuration => "IOC-CONFIG",
        }
    }

    /// 错误码描述
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::Initialization => "组件初始化失败",
            ErrorCode::DependencyResolution => "依赖解析失败",
            ErrorCode::Wiring => "依赖注入失败",
            ErrorCode::IllegalState => "容器状态非法",
            ErrorCode::Configuration => "容器配置错误",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 容器统一错误类型
///
/// 所有硬失败最终都以此类型返回给 `init()` 的调用方：
/// 可选的错误码、可读消息以及可选的底层原因。
#[derive(Error, Debug)]
pub struct IocError {
    code: Option<ErrorCode>,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl IocError {
    /// 仅包含消息
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            source: None,
        }
    }

    /// 仅包装原因，消息取自原因
    pub fn from_source(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self {
            code: None,
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// 仅包含错误码，消息取自错误码描述
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code: Some(code),
            message: code.description().to_string(),
            source: None,
        }
    }

    /// 错误码和消息
    pub fn with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            source: None,
        }
    }

    /// 消息和原因
    pub fn wrap(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            code: None,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 错误码、消息和原因
    pub fn wrap_with_code(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 错误码
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// 错误消息
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 尝试把底层原因转换为具体错误类型
    pub fn cause_as<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_deref().and_then(|e| e.downcast_ref::<E>())
    }
}

impl fmt::Display for IocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "[{}] ", code)?;
        }
        f.write_str(&self.message)?;
        if let Some(source) = &self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl From<DiscoveryError> for IocError {
    fn from(error: DiscoveryError) -> Self {
        IocError::wrap_with_code(ErrorCode::Initialization, "组件发现失败", error)
    }
}

impl From<DependencyError> for IocError {
    fn from(error: DependencyError) -> Self {
        IocError::wrap_with_code(error.error_code(), "依赖注入失败", error)
    }
}

impl From<ConfigError> for IocError {
    fn from(error: ConfigError) -> Self {
        IocError::wrap_with_code(ErrorCode::Configuration, "容器配置加载失败", error)
    }
}

/// 结果类型别名
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type IocResult<T> = Result<T, IocError>;
