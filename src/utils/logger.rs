use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 依 `--log-format` 或 `[logging] format` 初始化日誌。
///
/// `"json"` 給日誌收集器使用，其餘一律用精簡格式。`RUST_LOG` 存在時優先。
pub fn init_logger(format: Option<&str>, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        Some("json") => registry.with(layer.json()).init(),
        _ => registry.with(layer.compact()).init(),
    }
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "galerya=debug,info"
    } else {
        "galerya=info"
    }
}
