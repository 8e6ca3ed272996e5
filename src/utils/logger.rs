use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `--verbose` wins over the configured level; `RUST_LOG` wins over both.
fn cli_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        return "paradaim_site=debug,tower_http=debug,info".to_string();
    }
    match level {
        Some(level) => format!("paradaim_site={},tower_http={}", level, level),
        None => "paradaim_site=info".to_string(),
    }
}

fn json_directive(level: Option<&str>) -> String {
    let level = level.unwrap_or("info");
    format!("paradaim_site={},tower_http={}", level, level)
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli_directive(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 伺服器部署使用 JSON 格式，方便集中式日誌收集
pub fn init_json_logger(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(json_directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_directive_uses_configured_level() {
        assert_eq!(
            cli_directive(false, Some("warn")),
            "paradaim_site=warn,tower_http=warn"
        );
        assert_eq!(cli_directive(false, None), "paradaim_site=info");
    }

    #[test]
    fn test_verbose_overrides_configured_level() {
        assert_eq!(
            cli_directive(true, Some("error")),
            "paradaim_site=debug,tower_http=debug,info"
        );
    }

    #[test]
    fn test_json_directive_defaults_to_info() {
        assert_eq!(json_directive(None), "paradaim_site=info,tower_http=info");
        assert_eq!(
            json_directive(Some("trace")),
            "paradaim_site=trace,tower_http=trace"
        );
    }
}
