use teleop::SessionConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::sim::SimRig;

const EXCLUDED_ANIMS_ENV_VAR: &str = "STATION_EXCLUDED_ANIMS";
const TICK_MS_ENV_VAR: &str = "STATION_TICK_MS";
const DEFAULT_TICK_MS: u64 = 60;

pub(crate) struct AppWiring {
    pub(crate) config: SessionConfig,
    pub(crate) rig: SimRig,
    pub(crate) tick_ms: u64,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Station Startup ===");

    let mut config = SessionConfig::default();
    config
        .excluded_animations
        .extend(parse_excluded_anims_from_env());

    AppWiring {
        config,
        rig: SimRig::default(),
        tick_ms: parse_tick_ms_from_env(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn parse_excluded_anims_from_env() -> Vec<String> {
    std::env::var(EXCLUDED_ANIMS_ENV_VAR)
        .ok()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
}

fn parse_tick_ms_from_env() -> u64 {
    std::env::var(TICK_MS_ENV_VAR)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|tick_ms| *tick_ms > 0)
        .unwrap_or(DEFAULT_TICK_MS)
}
