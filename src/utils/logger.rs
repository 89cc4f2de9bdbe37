use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins; otherwise our own crates log at `level` and everything else at warn.
fn solid_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("solid_principles={level},solid={level},warn"))
    })
}

pub fn init_cli_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(solid_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// One JSON object per event, for piping into a log collector.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(solid_filter("info"))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true) // 欄位攤平到最外層
                .with_current_span(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_filter_levels() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = solid_filter("debug").to_string();
        assert!(filter.contains("solid_principles=debug"));
        assert!(filter.contains("solid=debug"));
        assert!(filter.contains("warn"));
    }
}
