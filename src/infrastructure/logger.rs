//! 日志基础设施

use std::io;
use std::path::Path;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// `RUST_LOG` 优先于配置中的级别。设置了 `log_dir` 时额外写入按日期分割的文件，
    /// 返回的 guard 必须一直持有到进程退出，否则文件日志会丢失。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))?;

        let console = fmt::layer().with_writer(io::stdout).with_ansi(true);

        match &config.log_dir {
            Some(dir) => {
                let (file_writer, guard) = Self::file_writer(dir, &config.file_prefix)?;
                tracing_subscriber::registry()
                    .with(filter)
                    .with(console)
                    .with(
                        fmt::layer()
                            .with_writer(file_writer)
                            .with_ansi(false)
                            .with_target(false)
                            .with_thread_names(true),
                    )
                    .try_init()?;
                Ok(Some(guard))
            }
            None => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(console)
                    .try_init()?;
                Ok(None)
            }
        }
    }

    fn file_writer(
        dir: &Path,
        file_prefix: &str,
    ) -> io::Result<(non_blocking::NonBlocking, WorkerGuard)> {
        std::fs::create_dir_all(dir)?;
        Ok(non_blocking(rolling::daily(dir, file_prefix)))
    }
}
