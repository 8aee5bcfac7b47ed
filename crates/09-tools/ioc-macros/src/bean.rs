//! `#[derive(Bean)]` 实现

use crate::utils::{extract_inject_target, registration_fn_name};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parenthesized, punctuated::Punctuated, spanned::Spanned, Attribute, Data, DeriveInput, Error,
    ExprPath, Fields, Ident, LitStr, Result, Token, Type,
};

/// 组件标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StereotypeArg {
    Component,
    Service,
    Repository,
    Controller,
}

impl StereotypeArg {
    fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "component" => Some(Self::Component),
            "service" => Some(Self::Service),
            "repository" => Some(Self::Repository),
            "controller" => Some(Self::Controller),
            _ => None,
        }
    }

    fn tokens(self) -> TokenStream {
        match self {
            Self::Component => quote! { ::ioc_common::Stereotype::Component },
            Self::Service => quote! { ::ioc_common::Stereotype::Service },
            Self::Repository => quote! { ::ioc_common::Stereotype::Repository },
            Self::Controller => quote! { ::ioc_common::Stereotype::Controller },
        }
    }
}

/// `#[bean(...)]` 参数
#[derive(Default)]
pub struct BeanArgs {
    pub stereotype: Option<StereotypeArg>,
    pub interfaces: Vec<Type>,
    pub constructor: Option<ExprPath>,
    pub namespace: Option<LitStr>,
}

impl BeanArgs {
    /// 从结构体属性中解析，没有 `#[bean]` 时使用默认值
    pub fn from_attributes(attrs: &[Attribute]) -> Result<Self> {
        let mut args = BeanArgs::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("bean")) {
            attr.parse_nested_meta(|meta| {
                if let Some(stereotype) = meta.path.get_ident().and_then(StereotypeArg::from_ident) {
                    if args.stereotype.replace(stereotype).is_some() {
                        return Err(meta.error("组件标记只能指定一个"));
                    }
                    return Ok(());
                }

                if meta.path.is_ident("implements") {
                    let content;
                    parenthesized!(content in meta.input);
                    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                    args.interfaces.extend(types);
                    return Ok(());
                }

                if meta.path.is_ident("constructor") {
                    args.constructor = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                if meta.path.is_ident("namespace") {
                    args.namespace = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                Err(meta.error(
                    "不支持的参数，可用: component, service, repository, controller, implements(..), constructor = .., namespace = \"..\"",
                ))
            })?;
        }

        Ok(args)
    }
}

/// 带 `#[inject]` 标记的字段
pub struct InjectField {
    pub name: Ident,
    pub target: Type,
    pub implementation: Option<Type>,
}

impl InjectField {
    /// 解析字段上的 `#[inject]` / `#[inject(implementation = P)]`
    fn parse(field: &syn::Field, attr: &Attribute) -> Result<Self> {
        let name = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "#[inject] 只能用于具名字段"))?;
        let target = extract_inject_target(&field.ty)
            .cloned()
            .ok_or_else(|| Error::new(field.ty.span(), "#[inject] 只能用于 Inject<T> 类型的字段"))?;

        let mut implementation = None;
        if !matches!(attr.meta, syn::Meta::Path(_)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("implementation") {
                    implementation = Some(meta.value()?.parse::<Type>()?);
                    Ok(())
                } else {
                    Err(meta.error("不支持的参数，可用: implementation = 类型"))
                }
            })?;
        }

        Ok(Self {
            name,
            target,
            implementation,
        })
    }

    fn to_injection_point(&self) -> TokenStream {
        let name = &self.name;
        let field = name.to_string();
        let target = &self.target;
        let point = quote! {
            ::ioc_common::InjectionPoint::new::<Self, #target>(#field, |owner| &owner.#name)
        };
        match &self.implementation {
            Some(implementation) => quote! {
                #point.with_implementation(::ioc_common::TypeKey::of::<#implementation>())
            },
            None => point,
        }
    }
}

/// 收集所有注入字段
fn collect_inject_fields(data: &Data, input: &DeriveInput) -> Result<Vec<InjectField>> {
    let fields = match data {
        Data::Struct(data) => &data.fields,
        _ => return Err(Error::new(input.ident.span(), "#[derive(Bean)] 只能用于结构体")),
    };

    let mut injected = Vec::new();
    match fields {
        Fields::Named(named) => {
            for field in &named.named {
                for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
                    injected.push(InjectField::parse(field, attr)?);
                }
            }
        }
        Fields::Unnamed(unnamed) => {
            if let Some(field) = unnamed
                .unnamed
                .iter()
                .find(|field| field.attrs.iter().any(|attr| attr.path().is_ident("inject")))
            {
                return Err(Error::new(field.span(), "#[inject] 只能用于具名字段"));
            }
        }
        Fields::Unit => {}
    }
    Ok(injected)
}

/// 展开 `#[derive(Bean)]`
pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "#[derive(Bean)] 不支持泛型类型",
        ));
    }

    let args = BeanArgs::from_attributes(&input.attrs)?;
    let injected = collect_inject_fields(&input.data, &input)?;
    let ident = &input.ident;

    let stereotype = args
        .stereotype
        .unwrap_or(StereotypeArg::Component)
        .tokens();

    let create = match &args.constructor {
        Some(constructor) => quote! {
            #constructor().map_err(::core::convert::Into::into)
        },
        None => quote! {
            ::core::result::Result::Ok(<Self as ::core::default::Default>::default())
        },
    };

    let namespace = match &args.namespace {
        Some(namespace) => quote! { #namespace },
        None => quote! { ::core::module_path!() },
    };

    let interfaces = args.interfaces.iter().map(|interface| {
        quote! { ::ioc_common::implements!(#ident => #interface) }
    });
    let injection_points = injected.iter().map(InjectField::to_injection_point);
    let register = registration_fn_name("register", ident);

    Ok(quote! {
        impl ::ioc_common::Bean for #ident {
            fn create() -> ::core::result::Result<Self, ::ioc_common::BoxError> {
                #create
            }

            fn stereotype() -> ::ioc_common::Stereotype {
                #stereotype
            }

            fn namespace() -> &'static str {
                #namespace
            }

            fn interfaces() -> ::std::vec::Vec<::ioc_common::InterfaceBinding> {
                ::std::vec![#(#interfaces),*]
            }

            fn injection_points() -> ::std::vec::Vec<::ioc_common::InjectionPoint> {
                ::std::vec![#(#injection_points),*]
            }
        }

        // 注册函数放在匿名常量块内，同名的 snake_case 形式互不冲突
        const _: () = {
            #[ctor::ctor]
            fn #register() {
                ::ioc_common::submit_type(<#ident as ::ioc_common::Bean>::descriptor());
            }
        };
    })
}
