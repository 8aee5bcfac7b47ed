//! 问候服务和控制器

use crate::notifiers::{EmailNotifier, Notifier};
use ioc_common::Inject;
use ioc_macros::Bean;

/// 问候服务
#[derive(Default, Bean)]
#[bean(service)]
pub struct Greeter {
    #[inject]
    notifier: Inject<dyn Notifier>,
}

impl Greeter {
    /// 通过注入的渠道发送问候；未注入渠道时只返回问候语
    pub fn greet(&self, name: &str) -> String {
        let message = format!("hello, {name}");
        match self.notifier.get() {
            Some(notifier) => notifier.notify(&message),
            None => message,
        }
    }
}

/// 问候控制器
#[derive(Default, Bean)]
#[bean(controller)]
pub struct GreetingController {
    #[inject]
    greeter: Inject<Greeter>,
    #[inject(implementation = EmailNotifier)]
    audit: Inject<dyn Notifier>,
}

impl GreetingController {
    /// 处理一次问候请求
    pub fn handle(&self, name: &str) -> Vec<String> {
        let mut sent = Vec::new();
        if let Some(greeter) = self.greeter.get() {
            sent.push(greeter.greet(name));
        }
        if let Some(audit) = self.audit.get() {
            sent.push(audit.notify(&format!("greeted {name} via {}", self.channel_hint())));
        }
        sent
    }

    fn channel_hint(&self) -> &'static str {
        self.greeter
            .get()
            .and_then(|greeter| greeter.notifier.get())
            .map_or("nothing", |notifier| notifier.channel())
    }
}
