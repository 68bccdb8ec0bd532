use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub api: ApiSettings,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub id: String,
    pub title: String,
    /// Account number prefix passed to `ledger/stat`.
    pub account: String,
    #[serde(default = "default_chart_kind")]
    pub kind: String,
    #[serde(default)]
    pub cumulative: bool,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_chart_kind() -> String {
    "line".to_string()
}

impl ApiSettings {
    /// Blank tokens in config files count as no token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

pub fn load_console_config() -> anyhow::Result<ConsoleConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/console").required(false))
        .add_source(config::Environment::with_prefix("CONSOLE").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> ConsoleConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(
            r#"
            [api]
            base_url = "http://localhost:8000"
            "#,
        );

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.token(), None);
        assert!(config.dashboard.charts.is_empty());
    }

    #[test]
    fn test_dashboard_charts() {
        let config = parse(
            r##"
            [server]
            bind = "127.0.0.1:9000"

            [api]
            base_url = "http://api.internal"
            token = "secret"
            timeout_secs = 3

            [[dashboard.charts]]
            id = "cash"
            title = "Cash"
            account = "38"
            cumulative = true
            border_color = "#3273dc"

            [[dashboard.charts]]
            id = "revenue"
            title = "Revenue"
            account = "9"
            kind = "bar"
            "##,
        );

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.api.token(), Some("secret"));
        assert_eq!(config.api.timeout_secs, 3);

        let charts = &config.dashboard.charts;
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].account, "38");
        assert!(charts[0].cumulative);
        assert_eq!(charts[0].kind, "line");
        assert_eq!(charts[0].border_color.as_deref(), Some("#3273dc"));
        assert_eq!(charts[0].background_color, None);
        assert_eq!(charts[1].kind, "bar");
        assert!(!charts[1].cumulative);
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = parse(
            r#"
            [api]
            base_url = "http://localhost:8000"
            token = "  "
            "#,
        );
        assert_eq!(config.api.token(), None);
    }
}
