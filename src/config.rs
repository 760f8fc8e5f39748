use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/scores";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_LATEST_COUNT: usize = 5;

/// Dashboard settings. The host page may override any subset as JSON;
/// missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub endpoint: String,
    #[serde(rename = "refresh_interval_secs", deserialize_with = "deserialize_seconds")]
    pub refresh_interval: Duration,
    pub latest_count: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            latest_count: DEFAULT_LATEST_COUNT,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn deserialize_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    if secs == 0 {
        return Err(serde::de::Error::custom("refresh_interval_secs must be positive"));
    }
    Ok(Duration::from_secs(secs))
}

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

/// Fix the configuration for this page. Only the first call wins.
pub fn install_config(config: DashboardConfig) -> &'static DashboardConfig {
    CONFIG.get_or_init(|| config)
}

pub fn config() -> &'static DashboardConfig {
    CONFIG.get_or_init(DashboardConfig::default)
}
