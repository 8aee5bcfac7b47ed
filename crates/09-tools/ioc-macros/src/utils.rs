//! 宏工具函数

use proc_macro2::Span;
use syn::{GenericArgument, Ident, PathArguments, Type};

/// 从 `Inject<T>` 中提取 `T`，其他类型返回 `None`
pub fn extract_inject_target(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Inject" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// 将驼峰命名转换为蛇形命名
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            let prev_is_lower = chars.get(i - 1).map_or(false, |c| c.is_lowercase());
            let next_is_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());

            if prev_is_lower || next_is_lower {
                result.push('_');
            }
        }
        result.extend(ch.to_lowercase());
    }

    result
}

/// 生成 ctor 注册函数名
pub fn registration_fn_name(prefix: &str, ident: &Ident) -> Ident {
    Ident::new(
        &format!("__ioc_{}_{}", prefix, to_snake_case(&ident.to_string())),
        Span::call_site(),
    )
}
