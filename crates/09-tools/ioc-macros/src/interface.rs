//! `#[interface(implementation = P)]` 实现

use crate::utils::registration_fn_name;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{meta::ParseNestedMeta, spanned::Spanned, Error, ItemTrait, Result, Type};

/// `#[interface(...)]` 参数
#[derive(Default)]
pub struct InterfaceArgs {
    pub implementation: Option<Type>,
}

impl InterfaceArgs {
    /// 解析单个参数，配合 `syn::meta::parser` 使用
    pub fn parse(&mut self, meta: ParseNestedMeta<'_>) -> Result<()> {
        if meta.path.is_ident("implementation") {
            self.implementation = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("不支持的参数，可用: implementation = 类型"))
        }
    }
}

/// 展开 `#[interface]`：原样保留 trait，并登记接口级的显式实现
pub fn expand(args: InterfaceArgs, item: ItemTrait) -> Result<TokenStream> {
    if !item.generics.params.is_empty() {
        return Err(Error::new(item.generics.span(), "#[interface] 不支持泛型 trait"));
    }
    let implementation = args.implementation.ok_or_else(|| {
        Error::new(
            item.ident.span(),
            "#[interface] 需要指定实现类: #[interface(implementation = 类型)]",
        )
    })?;

    let ident = &item.ident;
    let register = registration_fn_name("interface", ident);

    Ok(quote! {
        #item

        const _: () = {
            #[ctor::ctor]
            fn #register() {
                ::ioc_common::submit_override(
                    ::ioc_common::InterfaceOverride::new::<dyn #ident, #implementation>(),
                );
            }
        };
    })
}
