//! # IoC Macros
//!
//! 这个 crate 提供了用于编译时组件注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`Bean`](derive@Bean) - 实现 `ioc_common::Bean` 并登记到进程级类型注册表
//! - [`interface`] - 为 trait 指定显式实现类
//!
//! 生成的注册函数使用 `ctor` 在程序启动时执行，使用方需要依赖 `ctor` 和 `ioc-common`。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use ioc_common::Inject;
//! use ioc_macros::{interface, Bean};
//!
//! #[interface(implementation = EmailNotifier)]
//! pub trait Notifier: Send + Sync {
//!     fn notify(&self, message: &str) -> String;
//! }
//!
//! #[derive(Default, Bean)]
//! #[bean(service, implements(dyn Notifier))]
//! pub struct EmailNotifier;
//!
//! #[derive(Default, Bean)]
//! pub struct Greeter {
//!     #[inject]
//!     notifier: Inject<dyn Notifier>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, ItemTrait};

mod bean;
mod interface;
mod utils;

/// 组件派生宏
///
/// 为结构体实现 `Bean` trait，并在程序启动时把类型条目写入进程级注册表。
///
/// # 结构体参数 `#[bean(...)]`
///
/// - `component` / `service` / `repository` / `controller` - 组件标记（默认 `component`）
/// - `implements(dyn A, dyn B)` - 实现的接口
/// - `constructor = path` - 无参构造函数，返回 `Result<Self, E>`；默认使用 `Default::default`
/// - `namespace = "..."` - 覆盖命名空间（默认是所在模块路径）
///
/// # 字段参数
///
/// - `#[inject]` - 注入标记，字段类型必须是 `Inject<T>`
/// - `#[inject(implementation = P)]` - 指定实现类
#[proc_macro_derive(Bean, attributes(bean, inject))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    bean::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// 接口显式实现宏
///
/// 标注在 trait 上，指定注入该接口时使用的实现类，优先于扫描结果。
///
/// # 示例
///
/// ```rust,ignore
/// #[interface(implementation = SmsNotifier)]
/// pub trait Notifier: Send + Sync {}
/// ```
#[proc_macro_attribute]
pub fn interface(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut interface_args = interface::InterfaceArgs::default();
    let parser = syn::meta::parser(|meta| interface_args.parse(meta));
    parse_macro_input!(args with parser);

    let item = parse_macro_input!(input as ItemTrait);
    interface::expand(interface_args, item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
