//! Output configuration.
//!
//! Settings come from a parameter string of comma separated `key=value`
//! pairs, e.g. `"format=sympy,power=caret"`, or from any serde source.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported parameter: {0}")]
    UnknownParameter(String),

    #[error("invalid value {value:?} for parameter {key}")]
    InvalidValue { key: String, value: String },
}

/// How a whole matrix is wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixFormat {
    /// `[[a, 0], [0, b]]`
    #[default]
    Bracketed,
    /// `Matrix([[a, 0], [0, b]])`
    Sympy,
}

/// Operator used for symbolic powers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerStyle {
    /// `x**2`
    #[default]
    DoubleStar,
    /// `x^2`
    Caret,
}

impl PowerStyle {
    pub fn operator(self) -> &'static str {
        match self {
            PowerStyle::DoubleStar => "**",
            PowerStyle::Caret => "^",
        }
    }
}

/// How matrices are rendered.
///
/// The binary always prints with `DisplayConfig::default()`. Library callers
/// build one from a `"format=sympy,power=^"` string with
/// [`DisplayConfig::from_parameters`], or deserialize it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: MatrixFormat,
    pub power: PowerStyle,
}

impl DisplayConfig {
    /// Parse configuration from parameter string
    pub fn from_parameters(parameters: &str) -> Result<Self, ConfigError> {
        let params = parse_parameters(parameters);
        let mut config = Self::default();

        for (key, value) in &params {
            let invalid = || ConfigError::InvalidValue {
                key: key.clone(),
                value: value.clone(),
            };
            match key.as_str() {
                "format" => {
                    config.format = match value.as_str() {
                        "bracketed" => MatrixFormat::Bracketed,
                        "sympy" => MatrixFormat::Sympy,
                        _ => return Err(invalid()),
                    }
                }
                "power" => {
                    config.power = match value.as_str() {
                        "double_star" | "**" => PowerStyle::DoubleStar,
                        "caret" | "^" => PowerStyle::Caret,
                        _ => return Err(invalid()),
                    }
                }
                _ => return Err(ConfigError::UnknownParameter(key.clone())),
            }
        }

        Ok(config)
    }
}

/// Split `"k1=v1, k2=v2"` into a map. Keys without `=` map to an empty value;
/// empty segments are skipped.
pub fn parse_parameters(parameters: &str) -> HashMap<String, String> {
    parameters
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (segment.to_string(), String::new()),
        })
        .collect()
}
