//! 类型注册条目
//!
//! 用声明式的描述代替运行时反射：每个类型自己提供构造函数、
//! 实现的接口以及需要注入的字段。

use crate::component::{Bean, BeanRef};
use crate::errors::BoxError;
use crate::inject::Inject;
use crate::metadata::{Stereotype, TypeKey};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 接口实例，内部是 `Arc<I>`（`I` 通常为 `dyn Trait`）
pub type InterfaceRef = Box<dyn Any + Send + Sync>;

/// 组件构造函数类型
pub type ConstructorFn = Arc<dyn Fn() -> Result<BeanRef, BoxError> + Send + Sync>;

/// 向上转型函数类型
pub type UpcastFn = Arc<dyn Fn(BeanRef) -> Option<InterfaceRef> + Send + Sync>;

/// 字段赋值函数类型
pub type AssignFn = Arc<dyn Fn(&(dyn Any + Send + Sync), InterfaceRef) -> Result<(), String> + Send + Sync>;

/// 接口实现绑定
///
/// 描述一个具体类型如何转换为它实现的某个接口。
#[derive(Clone)]
pub struct InterfaceBinding {
    interface: TypeKey,
    upcast: UpcastFn,
}

impl InterfaceBinding {
    /// 通过转换函数创建绑定，通常配合 [`implements!`](crate::implements) 使用
    pub fn of<C, I>(convert: fn(Arc<C>) -> Arc<I>) -> Self
    where
        C: Any + Send + Sync,
        I: ?Sized + Send + Sync + 'static,
    {
        Self {
            interface: TypeKey::of::<I>(),
            upcast: Arc::new(move |bean: BeanRef| {
                let concrete = bean.downcast::<C>().ok()?;
                Some(Box::new(convert(concrete)) as InterfaceRef)
            }),
        }
    }

    /// 具体类型到自身的绑定
    pub fn identity<C: Any + Send + Sync>() -> Self {
        Self::of::<C, C>(|bean| bean)
    }

    /// 绑定的接口
    pub fn interface(&self) -> TypeKey {
        self.interface
    }

    /// 把实例转换为接口实例，类型不匹配时返回 `None`
    pub fn upcast(&self, bean: BeanRef) -> Option<InterfaceRef> {
        (self.upcast)(bean)
    }
}

impl fmt::Debug for InterfaceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceBinding")
            .field("interface", &self.interface.name())
            .field("upcast", &"<function>")
            .finish()
    }
}

/// 注入点
///
/// 对应一个带注入标记的字段：所属类型、字段名、声明的目标类型，
/// 以及可选的显式实现类。
#[derive(Clone)]
pub struct InjectionPoint {
    owner: TypeKey,
    field: &'static str,
    target: TypeKey,
    implementation: Option<TypeKey>,
    assign: AssignFn,
}

impl InjectionPoint {
    /// 通过字段访问函数创建注入点
    pub fn new<O, T>(field: &'static str, accessor: fn(&O) -> &Inject<T>) -> Self
    where
        O: Any + Send + Sync,
        T: ?Sized + Send + Sync + 'static,
    {
        let assign: AssignFn = Arc::new(move |owner: &(dyn Any + Send + Sync), dependency: InterfaceRef| {
            let owner = owner
                .downcast_ref::<O>()
                .ok_or_else(|| format!("实例类型不是 {}", std::any::type_name::<O>()))?;
            let dependency = dependency
                .downcast::<Arc<T>>()
                .map_err(|_| format!("依赖实例无法转换为 {}", std::any::type_name::<T>()))?;
            accessor(owner).set(*dependency);
            Ok(())
        });

        Self {
            owner: TypeKey::of::<O>(),
            field,
            target: TypeKey::of::<T>(),
            implementation: None,
            assign,
        }
    }

    /// 指定显式实现类，跳过扫描
    pub fn with_implementation(mut self, implementation: TypeKey) -> Self {
        self.implementation = Some(implementation);
        self
    }

    /// 所属类型
    pub fn owner(&self) -> TypeKey {
        self.owner
    }

    /// 字段名
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// 声明的目标类型
    pub fn target(&self) -> TypeKey {
        self.target
    }

    /// 显式实现类
    pub fn implementation(&self) -> Option<TypeKey> {
        self.implementation
    }

    /// 把依赖实例写入字段
    pub fn assign(&self, owner: &(dyn Any + Send + Sync), dependency: InterfaceRef) -> Result<(), String> {
        (self.assign)(owner, dependency)
    }
}

impl fmt::Debug for InjectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionPoint")
            .field("owner", &self.owner.name())
            .field("field", &self.field)
            .field("target", &self.target.name())
            .field("implementation", &self.implementation.map(|key| key.name()))
            .finish()
    }
}

/// 类型注册条目
///
/// 没有组件标记的条目可以被扫描到（例如作为接口实现类），但不会被实例化。
#[derive(Clone)]
pub struct TypeDescriptor {
    key: TypeKey,
    namespace: String,
    stereotype: Option<Stereotype>,
    constructor: Option<ConstructorFn>,
    bindings: Vec<InterfaceBinding>,
    injection_points: Vec<InjectionPoint>,
}

impl TypeDescriptor {
    /// 从 [`Bean`] 实现构建条目
    pub fn bean<T: Bean>() -> Self {
        let mut descriptor = Self::plain::<T>()
            .in_namespace(T::namespace())
            .with_stereotype(T::stereotype())
            .with_constructor(|| T::create().map(|bean| Arc::new(bean) as BeanRef));
        for binding in T::interfaces() {
            descriptor = descriptor.with_binding(binding);
        }
        for point in T::injection_points() {
            descriptor = descriptor.with_injection_point(point);
        }
        descriptor
    }

    /// 没有组件标记的条目
    pub fn plain<T: Any + Send + Sync>() -> Self {
        let key = TypeKey::of::<T>();
        Self {
            key,
            namespace: key.module_path().to_string(),
            stereotype: None,
            constructor: None,
            bindings: vec![InterfaceBinding::identity::<T>()],
            injection_points: Vec::new(),
        }
    }

    /// 设置命名空间
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// 设置组件标记
    pub fn with_stereotype(mut self, stereotype: Stereotype) -> Self {
        self.stereotype = Some(stereotype);
        self
    }

    /// 设置构造函数
    pub fn with_constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn() -> Result<BeanRef, BoxError> + Send + Sync + 'static,
    {
        self.constructor = Some(Arc::new(constructor));
        self
    }

    /// 添加接口绑定，同一接口的绑定会被替换
    pub fn with_binding(mut self, binding: InterfaceBinding) -> Self {
        self.bindings
            .retain(|existing| existing.interface() != binding.interface());
        self.bindings.push(binding);
        self
    }

    /// 添加注入点
    pub fn with_injection_point(mut self, point: InjectionPoint) -> Self {
        self.injection_points.push(point);
        self
    }

    /// 类型标识
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// 命名空间
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// 组件标记
    pub fn stereotype(&self) -> Option<Stereotype> {
        self.stereotype
    }

    /// 是否带有可注册标记
    pub fn is_registerable(&self) -> bool {
        self.stereotype.is_some()
    }

    /// 调用构造函数，没有构造函数时返回 `None`
    pub fn instantiate(&self) -> Option<Result<BeanRef, BoxError>> {
        self.constructor.as_ref().map(|constructor| constructor())
    }

    /// 所有接口绑定（包含自身）
    pub fn bindings(&self) -> &[InterfaceBinding] {
        &self.bindings
    }

    /// 指定接口的绑定
    pub fn binding_for(&self, interface: &TypeKey) -> Option<&InterfaceBinding> {
        self.bindings
            .iter()
            .find(|binding| binding.interface() == *interface)
    }

    /// 是否实现了指定类型
    pub fn implements(&self, target: &TypeKey) -> bool {
        self.binding_for(target).is_some()
    }

    /// 注入点
    pub fn injection_points(&self) -> &[InjectionPoint] {
        &self.injection_points
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("key", &self.key.name())
            .field("namespace", &self.namespace)
            .field("stereotype", &self.stereotype)
            .field("bindings", &self.bindings)
            .field("injection_points", &self.injection_points)
            .field("constructor", &self.constructor.as_ref().map(|_| "<function>"))
            .finish()
    }
}

/// 接口级显式实现
///
/// 对应接口自身携带的覆盖标记。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceOverride {
    /// 接口
    pub interface: TypeKey,
    /// 显式实现类
    pub implementation: TypeKey,
}

impl InterfaceOverride {
    /// 创建接口覆盖
    pub fn new<I: ?Sized + 'static, P: 'static>() -> Self {
        Self {
            interface: TypeKey::of::<I>(),
            implementation: TypeKey::of::<P>(),
        }
    }
}
