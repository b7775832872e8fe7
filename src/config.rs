//! Runtime settings read from the environment (and `.env` via dotenv).

use crate::error::ConfigError;
use std::ffi::OsString;

pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";
pub const ENV_COLOR: &str = "SUBNET_CALC_COLOR";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Used when the log4rs YAML file cannot be loaded.
pub const FALLBACK_LOG_FILE: &str = "log/subnet-calc.log";

/// How the network definition is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: String,
    pub output: OutputFormat,
    /// `None` leaves colour detection to `colored` (NO_COLOR, CLICOLOR).
    pub color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            output: OutputFormat::Table,
            color: None,
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Read settings from explicit key/value pairs. Unknown keys are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();
        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            match key {
                ENV_LOG_CONFIG if !value.is_empty() => config.log_config = value.to_string(),
                ENV_OUTPUT => config.output = parse_output(key, value)?,
                ENV_COLOR => config.color = Some(parse_bool(key, value)?),
                _ => {}
            }
        }
        Ok(config)
    }
}

/// Drop variables whose name or value is not valid UTF-8.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_output(key: &str, value: &str) -> Result<OutputFormat, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        _ => Err(invalid(key, value)),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, "log4rs.yml");
        assert_eq!(config.output, OutputFormat::Table);
        assert_eq!(config.color, None);
    }

    #[test]
    fn test_from_vars() {
        let config = Config::from_vars([
            (ENV_LOG_CONFIG, "conf/log.yml"),
            (ENV_OUTPUT, "JSON"),
            (ENV_COLOR, "no"),
            ("PATH", "/usr/bin"),
        ])
        .unwrap();
        assert_eq!(config.log_config, "conf/log.yml");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.color, Some(false));
    }

    #[test]
    fn test_color_set_explicitly() {
        let config = Config::from_vars([(ENV_COLOR, "1")]).unwrap();
        assert_eq!(config.color, Some(true));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_vars_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (OsString::from("BINARY"), OsString::from_vec(vec![0x66, 0xff, 0x6f])),
            (OsString::from_vec(vec![0xfe]), OsString::from("x")),
            (OsString::from(ENV_OUTPUT), OsString::from("json")),
        ];
        let kept: Vec<(String, String)> = utf8_vars(vars).collect();
        assert_eq!(kept, vec![(ENV_OUTPUT.to_string(), "json".to_string())]);

        let config = Config::from_vars(kept).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_empty_log_config_keeps_default() {
        let config = Config::from_vars([(ENV_LOG_CONFIG, "  ")]).unwrap();
        assert_eq!(config.log_config, DEFAULT_LOG_CONFIG);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            Config::from_vars([(ENV_OUTPUT, "csv")]).unwrap_err(),
            ConfigError::InvalidValue {
                key: ENV_OUTPUT.to_string(),
                value: "csv".to_string()
            }
        );
        assert!(Config::from_vars([(ENV_COLOR, "maybe")]).is_err());
    }
}
