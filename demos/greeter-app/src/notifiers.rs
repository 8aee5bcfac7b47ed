//! 通知渠道

use ioc_macros::{interface, Bean};
use tracing::info;

/// 通知渠道
#[interface(implementation = ConsoleNotifier)]
pub trait Notifier: Send + Sync {
    /// 渠道名称
    fn channel(&self) -> &'static str;

    /// 发送消息，返回实际发送的内容
    fn notify(&self, message: &str) -> String;
}

/// 控制台通知
#[derive(Default, Bean)]
#[bean(service, implements(dyn Notifier))]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn channel(&self) -> &'static str {
        "console"
    }

    fn notify(&self, message: &str) -> String {
        info!("[console] {}", message);
        format!("console: {message}")
    }
}

/// 邮件通知
#[derive(Default, Bean)]
#[bean(service, implements(dyn Notifier))]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn notify(&self, message: &str) -> String {
        info!("[email] {}", message);
        format!("email: {message}")
    }
}
