//! Named indeterminates.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::SymbolicError;

/// A named symbol such as `a` or `x_1`.
///
/// Symbols compare and order by name, which fixes the order factors are
/// printed in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol {
    name: String,
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Symbol::new(String::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl Symbol {
    /// Names start with a letter or `_` and continue with alphanumerics or `_`.
    pub fn new(name: impl Into<String>) -> Result<Self, SymbolicError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid_head = chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_');
        if !valid_head || !chars.all(|c| c.is_alphanumeric() || c == '_') {
            return Err(SymbolicError::InvalidSymbolName(name));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
