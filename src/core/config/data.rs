use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::mapper::{ExpirationPolicy, ResponseMapper};
use crate::core::scopes::ScopeSplit;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// How granted scopes are split: "legacy" drops the last token like the
    /// shipped bridge, "complete" keeps every token
    pub scope_split: Option<ScopeSplit>,
    /// Token maps without an expiry: "omit" the key or emit it as "null"
    pub expiration: Option<ExpirationPolicy>,
    /// tracing filter directive used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

impl Config {
    pub fn mapper(&self) -> ResponseMapper {
        ResponseMapper::new(
            self.scope_split.unwrap_or_default(),
            self.expiration.unwrap_or_default(),
        )
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

/// Errors from `set`/`unset` on a configuration key.
#[derive(Debug, PartialEq, Eq)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    UnknownKey(String),
    /// The value is not one of the accepted choices for the key.
    InvalidValue {
        key: &'static str,
        input: String,
        expected: &'static str,
    },
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => write!(
                f,
                "Unknown config key: {key} (expected scope-split, expiration or log-filter)"
            ),
            SettingError::InvalidValue {
                key,
                input,
                expected,
            } => write!(f, "Invalid value for {key}: {input} (expected {expected})"),
        }
    }
}

impl std::error::Error for SettingError {}

impl Config {
    /// Sets `key` to `value`, or clears it when `value` is `None`.
    pub fn apply_setting(&mut self, key: &str, value: Option<&str>) -> Result<(), SettingError> {
        match key {
            "scope-split" => {
                self.scope_split = value
                    .map(|input| match input.trim().to_ascii_lowercase().as_str() {
                        "legacy" => Ok(ScopeSplit::Legacy),
                        "complete" => Ok(ScopeSplit::Complete),
                        _ => Err(SettingError::InvalidValue {
                            key: "scope-split",
                            input: input.to_string(),
                            expected: "legacy or complete",
                        }),
                    })
                    .transpose()?;
            }
            "expiration" => {
                self.expiration = value
                    .map(|input| match input.trim().to_ascii_lowercase().as_str() {
                        "omit" => Ok(ExpirationPolicy::Omit),
                        "null" => Ok(ExpirationPolicy::Null),
                        _ => Err(SettingError::InvalidValue {
                            key: "expiration",
                            input: input.to_string(),
                            expected: "omit or null",
                        }),
                    })
                    .transpose()?;
            }
            "log-filter" => {
                self.log_filter = value
                    .map(str::trim)
                    .filter(|filter| !filter.is_empty())
                    .map(str::to_string);
            }
            other => return Err(SettingError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}
