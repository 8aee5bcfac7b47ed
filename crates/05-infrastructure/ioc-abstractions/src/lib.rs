//! # IoC Abstractions
//!
//! IoC 容器抽象层，定义组件发现和依赖注入的核心接口。
//!
//! ## 核心接口
//!
//! - [`TypeScanner`] - 类型扫描器接口
//! - [`BeanRegistry`] - 单例注册表接口
//! - [`BeanDiscovery`] - 组件发现接口（第一阶段）
//! - [`DependencyResolver`] - 依赖解析接口（第二阶段）
//! - [`Container`] - 容器门面接口

pub mod container;
pub mod discovery;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use container::*;
pub use discovery::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;
