// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 日志写入 stderr,stdout 只输出生成的消息
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 参数
/// - verbose: true 时默认级别为 debug
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（优先于 verbose）
///   例如: RUST_LOG=debug 或 RUST_LOG=driver_messages=trace
///
/// # 示例
/// ```no_run
/// use driver_messages::logging;
/// logging::init(false);
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    // 从环境变量读取日志级别
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // 配置日志格式
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
