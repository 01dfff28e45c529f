//! 日誌系統初始化

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日誌
///
/// 優先使用 `RUST_LOG`；未設定時依 `-v` 次數決定層級（0: info, 1: debug, 2+: trace）。
/// 日誌寫到 stderr，避免混入報表輸出。
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 1)
        .with_line_number(verbose >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
