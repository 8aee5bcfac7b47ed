//! # IoC 容器具体实现
//!
//! 提供注册表、类型扫描器、组件发现器、依赖解析器和容器门面的实现。
//!
//! ```rust
//! use ioc_common::{implements, Bean, BoxError, Inject, InjectionPoint, InterfaceBinding, Stereotype, TypeCatalog};
//! use ioc_abstractions::{Container, ContainerExt};
//! use ioc_impl::IocContainerBuilder;
//!
//! pub trait Notifier: Send + Sync {
//!     fn notify(&self, message: &str) -> String;
//! }
//!
//! #[derive(Default)]
//! pub struct EmailNotifier;
//!
//! impl Notifier for EmailNotifier {
//!     fn notify(&self, message: &str) -> String {
//!         format!("email: {message}")
//!     }
//! }
//!
//! impl Bean for EmailNotifier {
//!     fn create() -> Result<Self, BoxError> {
//!         Ok(Self)
//!     }
//!     fn stereotype() -> Stereotype {
//!         Stereotype::Service
//!     }
//!     fn namespace() -> &'static str {
//!         "demo"
//!     }
//!     fn interfaces() -> Vec<InterfaceBinding> {
//!         vec![implements!(EmailNotifier => dyn Notifier)]
//!     }
//! }
//!
//! #[derive(Default)]
//! pub struct Greeter {
//!     notifier: Inject<dyn Notifier>,
//! }
//!
//! impl Bean for Greeter {
//!     fn create() -> Result<Self, BoxError> {
//!         Ok(Self::default())
//!     }
//!     fn namespace() -> &'static str {
//!         "demo"
//!     }
//!     fn injection_points() -> Vec<InjectionPoint> {
//!         vec![InjectionPoint::new::<Self, dyn Notifier>("notifier", |g| &g.notifier)]
//!     }
//! }
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.register::<Greeter>().register::<EmailNotifier>();
//!
//! let container = IocContainerBuilder::new()
//!     .namespace("demo")
//!     .catalog(catalog)
//!     .build()
//!     .unwrap();
//! container.init().unwrap();
//!
//! let greeter = container.get_bean::<Greeter>().unwrap();
//! let notifier = greeter.notifier.get().unwrap();
//! assert_eq!(notifier.notify("hi"), "email: hi");
//! ```

pub mod container;
pub mod discovery;
pub mod global;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod settings;

pub use container::*;
pub use discovery::*;
pub use global::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;
pub use settings::*;
