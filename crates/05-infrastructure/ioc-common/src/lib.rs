//! # IoC Common
//!
//! 这个 crate 提供了 IoC 容器的公共类型和注册表数据结构。
//!
//! ## 核心类型
//!
//! - [`TypeKey`] - 类型标识，注册表的键
//! - [`Stereotype`] - 四种可注册标记
//! - [`Bean`] - 可注册组件能力 trait
//! - [`Inject`] - 注入标记字段
//! - [`TypeDescriptor`] - 类型注册条目
//! - [`TypeCatalog`] - 显式的类型注册表
//! - [`IocError`] - 容器统一错误类型
//!
//! ## 设计原则
//!
//! - 编译时可见的类型注册，不依赖运行时反射
//! - 依赖通过声明式的注入点描述
//! - 每个容器独占自己的实例注册表

pub mod catalog;
pub mod component;
pub mod descriptor;
pub mod errors;
pub mod inject;
pub mod metadata;

pub use catalog::*;
pub use component::*;
pub use descriptor::*;
pub use errors::*;
pub use inject::*;
pub use metadata::*;

/// 为具体类型声明一个接口实现绑定
///
/// 生成 [`InterfaceBinding`]，把具体实例向上转型为 trait 对象。
///
/// ```rust
/// use ioc_common::{implements, InterfaceBinding};
///
/// pub trait Notifier: Send + Sync {
///     fn notify(&self, message: &str) -> String;
/// }
///
/// pub struct EmailNotifier;
///
/// impl Notifier for EmailNotifier {
///     fn notify(&self, message: &str) -> String {
///         format!("email: {message}")
///     }
/// }
///
/// let binding: InterfaceBinding = implements!(EmailNotifier => dyn Notifier);
/// assert!(binding.interface().is_interface());
/// ```
#[macro_export]
macro_rules! implements {
    ($concrete:ty => $interface:ty) => {
        $crate::InterfaceBinding::of::<$concrete, $interface>(
            |bean: ::std::sync::Arc<$concrete>| -> ::std::sync::Arc<$interface> { bean },
        )
    };
}
