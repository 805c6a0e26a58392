//! Market data providers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// External market data provider.
///
/// Chosen explicitly per request; parsing accepts `epex`, `nordpool` and
/// `bloomberg` in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// EPEX SPOT public market data.
    #[default]
    Epex,
    /// Nord Pool market data.
    NordPool,
    /// Bloomberg historical data.
    Bloomberg,
}

impl Provider {
    /// All supported providers.
    pub const ALL: [Provider; 3] = [Provider::Epex, Provider::NordPool, Provider::Bloomberg];

    /// Returns the identifier used in config files and on the command line.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Provider::Epex => "epex",
            Provider::NordPool => "nordpool",
            Provider::Bloomberg => "bloomberg",
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Epex => "EPEX SPOT",
            Provider::NordPool => "Nord Pool",
            Provider::Bloomberg => "Bloomberg",
        }
    }
}

impl FromStr for Provider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::unknown_provider(s))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("epex".parse::<Provider>().unwrap(), Provider::Epex);
        assert_eq!("NordPool".parse::<Provider>().unwrap(), Provider::NordPool);
        assert_eq!("BLOOMBERG".parse::<Provider>().unwrap(), Provider::Bloomberg);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "reuters".parse::<Provider>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownProvider { ref name } if name == "reuters"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Provider::NordPool).unwrap();
        assert_eq!(json, "\"nordpool\"");
        let parsed: Provider = serde_json::from_str("\"bloomberg\"").unwrap();
        assert_eq!(parsed, Provider::Bloomberg);
    }

    #[test]
    fn test_display() {
        assert_eq!(Provider::NordPool.to_string(), "Nord Pool");
    }
}
