//! Host configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use crawl_core::GameConfig;

/// Settings for one headless run.
///
/// Environment variables:
/// - `CRAWL_SEED` - fixed generator seed (default: wall clock)
/// - `CRAWL_TICK_RATE` - simulation ticks per second (default: 60)
/// - `CRAWL_MAX_TICKS` - hard stop for the run (default: 36000)
/// - `CRAWL_REALTIME` - sleep one tick length between ticks (default: false)
/// - `CRAWL_LOG_DIR` - also write `client.log` into this directory
/// - `CRAWL_SUMMARY_JSON` - print the end-of-run summary as JSON (default: false)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub seed: Option<u64>,
    pub tick_rate: u32,
    pub max_ticks: u64,
    pub realtime: bool,
    pub log_dir: Option<PathBuf>,
    pub summary_json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate: GameConfig::DEFAULT_TICK_RATE,
            max_ticks: 36_000,
            realtime: false,
            log_dir: None,
            summary_json: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or unparsable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64>(&lookup, "CRAWL_SEED") {
            config.seed = Some(seed);
        }
        if let Some(rate) = read_var::<u32>(&lookup, "CRAWL_TICK_RATE") {
            config.tick_rate = rate.max(1);
        }
        if let Some(max_ticks) = read_var::<u64>(&lookup, "CRAWL_MAX_TICKS") {
            config.max_ticks = max_ticks;
        }
        if let Some(realtime) = read_flag(&lookup, "CRAWL_REALTIME") {
            config.realtime = realtime;
        }
        if let Some(dir) = lookup("CRAWL_LOG_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(json) = read_flag(&lookup, "CRAWL_SUMMARY_JSON") {
            config.summary_json = json;
        }

        config
    }

    /// Core configuration with the host's tick rate applied.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new().with_tick_rate(self.tick_rate)
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn read_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
