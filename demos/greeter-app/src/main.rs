//! # 问候示例
//!
//! 演示通过派生宏登记组件、从配置文件构建进程级容器并获取注入完成的实例。

use anyhow::Context;
use clap::Parser;
use ioc_abstractions::{Container, ContainerExt};
use ioc_impl::{init_global, ContainerSettings};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod greeting;
mod notifiers;

use greeting::GreetingController;
use notifiers::Notifier;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "greeter-app")]
#[command(about = "IoC 容器问候示例")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "config/ioc.toml")]
    config: String,

    /// 覆盖配置中的命名空间
    #[arg(short, long)]
    namespace: Option<String>,

    /// 问候对象
    #[arg(default_value = "world")]
    name: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut settings = if Path::new(&args.config).exists() {
        ContainerSettings::from_file(&args.config)?
    } else {
        info!("配置文件不存在，使用默认配置源: {}", args.config);
        ContainerSettings::load()?
    };
    if let Some(namespace) = args.namespace {
        settings.namespace = namespace;
    } else if settings.namespace.is_empty() {
        settings.namespace = module_path!().to_string();
    }

    let container = init_global(settings)?;
    info!(
        "容器已就绪: namespace={}, state={}",
        container.namespace(),
        container.state()
    );

    let controller = container
        .get_bean::<GreetingController>()
        .context("GreetingController 未注册，请检查命名空间配置")?;
    for line in controller.handle(&args.name) {
        println!("{line}");
    }

    if let Some(notifier) = container.get_interface::<dyn Notifier>() {
        info!("默认通知渠道: {}", notifier.channel());
    }

    Ok(())
}
