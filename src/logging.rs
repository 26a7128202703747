use anyhow::anyhow;
use tracing_subscriber::{
    fmt, fmt::time::UtcTime, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

fn default_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,ghprofile=info",
        _ => "warn,ghprofile=debug",
    }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the `-v` level.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose)))
        .map_err(|err| anyhow!("invalid log filter: {err}"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_timer(UtcTime::rfc_3339()),
        )
        .try_init()
        .map_err(|err| anyhow!("logger already initialised: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_crate_level() {
        assert_eq!(default_directives(0), "warn");
        assert!(default_directives(1).contains("ghprofile=info"));
        assert!(default_directives(5).contains("ghprofile=debug"));
    }
}
