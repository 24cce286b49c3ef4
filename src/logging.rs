//! ログ初期化
//!
//! `RUST_LOG` が設定されていればそれを優先し、なければ `--verbose` で debug、通常は info。

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // テストなどで二重に初期化された場合は無視する
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
