//! 组件基础接口定义
//!
//! 提供所有可注册组件必须实现的能力 trait

use crate::descriptor::{InjectionPoint, InterfaceBinding, TypeDescriptor};
use crate::errors::BoxError;
use crate::metadata::{Stereotype, TypeKey};
use std::any::Any;
use std::sync::Arc;

/// 类型擦除后的单例实例
pub type BeanRef = Arc<dyn Any + Send + Sync>;

/// 可注册组件 trait
///
/// 实现此 trait 即表示类型带有可注册标记：容器会在发现阶段调用
/// [`Bean::create`] 创建唯一实例，并在注入阶段按 [`Bean::injection_points`]
/// 装配依赖。通常通过 `#[derive(Bean)]` 生成。
pub trait Bean: Any + Send + Sync + Sized {
    /// 无参构造函数
    fn create() -> Result<Self, BoxError>;

    /// 组件标记
    fn stereotype() -> Stereotype {
        Stereotype::Component
    }

    /// 组件所在命名空间，默认取类型的模块路径
    fn namespace() -> &'static str {
        TypeKey::of::<Self>().module_path()
    }

    /// 需要注入的字段
    fn injection_points() -> Vec<InjectionPoint> {
        Vec::new()
    }

    /// 实现的接口
    fn interfaces() -> Vec<InterfaceBinding> {
        Vec::new()
    }

    /// 构建类型注册条目
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::bean::<Self>()
    }
}

/// 把 [`BeanRef`] 还原为具体类型
pub fn downcast_bean<T: Any + Send + Sync>(bean: BeanRef) -> Option<Arc<T>> {
    bean.downcast::<T>().ok()
}
