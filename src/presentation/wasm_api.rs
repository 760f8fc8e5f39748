use crate::config::{DashboardConfig, install_config};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;

/// Mount the dashboard into `<body>`.
///
/// `config` is an optional plain object with any of `endpoint`,
/// `refresh_interval_secs` and `latest_count`; `undefined` or `null` keeps
/// the defaults.
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(&config)?;
    let installed = install_config(config);

    get_logger().log_with_metadata(
        LogLevel::Info,
        LogComponent::Presentation("WasmApi"),
        &format!("📊 Mounting dashboard against {}", installed.endpoint),
        &config_summary(installed),
    );

    leptos::mount_to_body(crate::app::App);
    Ok(())
}

/// Settings as `key=value` pairs for the mount log line.
pub fn config_summary(config: &DashboardConfig) -> String {
    format!(
        "refresh_interval_secs={} latest_count={}",
        config.refresh_interval.as_secs(),
        config.latest_count
    )
}

fn parse_config(value: &JsValue) -> Result<DashboardConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(DashboardConfig::default());
    }
    value.into_serde::<DashboardConfig>().map_err(|e| {
        get_logger().error(
            LogComponent::Presentation("WasmApi"),
            &format!("❌ Invalid dashboard config: {}", e),
        );
        JsValue::from_str(&format!("Invalid dashboard config: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_the_tunables() {
        let config = DashboardConfig::from_json(r#"{"refresh_interval_secs":30,"latest_count":8}"#).unwrap();
        assert_eq!(config_summary(&config), "refresh_interval_secs=30 latest_count=8");
        assert_eq!(
            config_summary(&DashboardConfig::default()),
            "refresh_interval_secs=10 latest_count=5"
        );
    }
}
