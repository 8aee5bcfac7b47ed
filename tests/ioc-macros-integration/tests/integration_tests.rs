//! Centralized integration tests for ioc-macros crate
//!
//! 宏生成的注册函数把类型写入进程级注册表，每个模块使用自己的命名空间。

use ioc_abstractions::{BeanRegistry, Container, ContainerExt, ContainerState};
use ioc_common::{global_catalog, Bean, Stereotype, TypeKey};
use ioc_impl::IocContainerBuilder;

mod greeting {
    use ioc_common::Inject;
    use ioc_macros::Bean;

    pub trait Notifier: Send + Sync {
        fn notify(&self, message: &str) -> String;
    }

    #[derive(Default, Bean)]
    #[bean(service, implements(dyn Notifier))]
    pub struct EmailNotifier;

    impl Notifier for EmailNotifier {
        fn notify(&self, message: &str) -> String {
            format!("email: {message}")
        }
    }

    #[derive(Default, Bean)]
    pub struct Greeter {
        #[inject]
        notifier: Inject<dyn Notifier>,
    }

    impl Greeter {
        pub fn greet(&self, name: &str) -> Option<String> {
            self.notifier
                .get()
                .map(|notifier| notifier.notify(&format!("hello {name}")))
        }
    }
}

mod dispatch {
    use ioc_common::Inject;
    use ioc_macros::{interface, Bean};

    #[interface(implementation = SmsChannel)]
    pub trait Channel: Send + Sync {
        fn name(&self) -> &'static str;
    }

    #[derive(Default, Bean)]
    #[bean(component, implements(dyn Channel))]
    pub struct EmailChannel;

    impl Channel for EmailChannel {
        fn name(&self) -> &'static str {
            "email"
        }
    }

    #[derive(Default, Bean)]
    #[bean(component, implements(dyn Channel))]
    pub struct SmsChannel;

    impl Channel for SmsChannel {
        fn name(&self) -> &'static str {
            "sms"
        }
    }

    #[derive(Default, Bean)]
    #[bean(controller)]
    pub struct Dispatcher {
        #[inject]
        pub primary: Inject<dyn Channel>,
        #[inject(implementation = EmailChannel)]
        pub audit: Inject<dyn Channel>,
    }
}

mod custom {
    use ioc_common::Inject;
    use ioc_macros::Bean;

    #[derive(Debug, Bean)]
    #[bean(repository, constructor = ConnectionPool::connect, namespace = "pooling")]
    pub struct ConnectionPool {
        pub size: usize,
    }

    impl ConnectionPool {
        pub fn connect() -> Result<Self, String> {
            Ok(Self { size: 4 })
        }
    }

    #[derive(Default, Bean)]
    #[bean(namespace = "pooling::clients")]
    pub struct PoolClient {
        #[inject]
        pub pool: Inject<ConnectionPool>,
    }
}

mod clients {
    use ioc_macros::Bean;

    #[allow(clippy::upper_case_acronyms)]
    #[derive(Default, Bean)]
    pub struct HTTPClient;

    #[derive(Default, Bean)]
    pub struct HttpClient;
}

mod broken {
    use ioc_macros::Bean;

    #[derive(Debug, Bean)]
    #[bean(constructor = Unreachable::open, namespace = "broken_backend")]
    pub struct Unreachable;

    impl Unreachable {
        pub fn open() -> Result<Self, std::io::Error> {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "backend refused connection",
            ))
        }
    }
}

#[test]
fn test_derive_implements_bean() {
    assert_eq!(
        <greeting::EmailNotifier as Bean>::stereotype(),
        Stereotype::Service
    );
    assert_eq!(<greeting::Greeter as Bean>::stereotype(), Stereotype::Component);
    assert_eq!(
        <greeting::Greeter as Bean>::namespace(),
        "integration_tests::greeting"
    );

    let points = <dispatch::Dispatcher as Bean>::injection_points();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].field(), "primary");
    assert_eq!(points[1].implementation(), Some(TypeKey::of::<dispatch::EmailChannel>()));
}

#[test]
fn test_types_submitted_to_global_catalog() {
    let catalog = global_catalog();
    assert!(catalog
        .describe(&TypeKey::of::<greeting::Greeter>())
        .is_some());
    assert_eq!(catalog.types_in("integration_tests::dispatch").len(), 3);
    assert_eq!(
        catalog.interface_override(&TypeKey::of::<dyn dispatch::Channel>()),
        Some(TypeKey::of::<dispatch::SmsChannel>())
    );
}

#[test]
fn test_greeter_end_to_end() {
    let container = IocContainerBuilder::new()
        .namespace("integration_tests::greeting")
        .build()
        .unwrap();
    container.init().unwrap();

    let greeter = container.get_bean::<greeting::Greeter>().unwrap();
    assert_eq!(greeter.greet("ada").as_deref(), Some("email: hello ada"));
    assert!(container.get_bean::<dispatch::Dispatcher>().is_none());
}

#[test]
fn test_interface_and_field_overrides() {
    let container = IocContainerBuilder::new()
        .namespace("integration_tests::dispatch")
        .build()
        .unwrap();
    container.init().unwrap();

    let dispatcher = container.get_bean::<dispatch::Dispatcher>().unwrap();
    assert_eq!(dispatcher.primary.get().unwrap().name(), "sms");
    assert_eq!(dispatcher.audit.get().unwrap().name(), "email");
    assert_eq!(
        container
            .get_interface::<dyn dispatch::Channel>()
            .unwrap()
            .name(),
        "sms"
    );
}

#[test]
fn test_custom_constructor_and_namespace() {
    let container = IocContainerBuilder::new()
        .namespace("pooling")
        .build()
        .unwrap();
    container.init().unwrap();

    let pool = container.get_bean::<custom::ConnectionPool>().unwrap();
    assert_eq!(pool.size, 4);
    let client = container.get_bean::<custom::PoolClient>().unwrap();
    assert!(std::sync::Arc::ptr_eq(&client.pool.get().unwrap(), &pool));
}

#[test]
fn test_same_snake_case_names_both_register() {
    let container = IocContainerBuilder::new()
        .namespace("integration_tests::clients")
        .build()
        .unwrap();
    container.init().unwrap();

    assert!(container.get_bean::<clients::HTTPClient>().is_some());
    assert!(container.get_bean::<clients::HttpClient>().is_some());
    assert_eq!(container.registry().len(), 2);
}

#[test]
fn test_constructor_error_fails_init() {
    let container = IocContainerBuilder::new()
        .namespace("broken_backend")
        .build()
        .unwrap();

    let error = container.init().unwrap_err();
    assert!(error.to_string().contains("backend refused connection"));
    assert_eq!(container.state(), ContainerState::Failed);
}
