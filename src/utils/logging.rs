//! 日志初始化与收尾
//!
//! 日志写入文件，按大小轮转；CLI 在退出前调用 `shutdown` 写完缓冲区。

use crate::config::LogConfig;
use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    WriteMode,
};
use std::sync::Mutex;

static HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 按 `LogConfig` 启动文件日志
///
/// 文件名为 `<dir>/<file>`，超过 `max_file_size` 字节后换新文件，
/// 只保留最近 `max_files` 个。`to_stderr` 为真时每条日志也写到标准错误。
///
/// ```no_run
/// use graphtrace::config::LogConfig;
/// use graphtrace::utils::logging;
///
/// logging::init(&LogConfig::default()).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> Result<(), FlexiLoggerError> {
    let spec = FileSpec::default()
        .basename(&config.file)
        .directory(&config.dir);
    let mut logger = Logger::try_with_str(&config.level)?
        .log_to_file(spec)
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append();

    if config.to_stderr {
        logger = logger.duplicate_to_stderr(Duplicate::All);
    }

    let handle = logger.start()?;
    if let Ok(mut slot) = HANDLE.lock() {
        *slot = Some(handle);
    }

    log::info!("日志写入 {}/{}，级别 {}", config.dir, config.file, config.level);
    Ok(())
}

/// 写完缓冲的日志并释放句柄，未初始化时什么也不做
pub fn shutdown() {
    let handle = HANDLE.lock().ok().and_then(|mut slot| slot.take());
    if let Some(handle) = handle {
        handle.flush();
    }
}

pub fn is_initialized() -> bool {
    HANDLE.lock().map(|slot| slot.is_some()).unwrap_or(false)
}
