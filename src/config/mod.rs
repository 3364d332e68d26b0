use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    errors::{ExpenseError, Result},
    ledger::parse_money,
    utils::persistence::{read_optional, write_atomic},
};

/// User settings persisted beside the expense file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Spending threshold per calendar month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<f64>,
    #[serde(default)]
    pub currency_symbol: String,
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Config> {
        match read_optional(&self.path)? {
            Some(data) if !data.trim().is_empty() => {
                serde_json::from_str(&data).map_err(|err| ExpenseError::Malformed {
                    path: self.path.clone(),
                    reason: err.to_string(),
                })
            }
            _ => {
                debug!(path = %self.path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, json.as_bytes())
    }

    /// Parses and stores a monthly limit; `0` clears it.
    pub fn set_limit(&self, raw: &str) -> Result<Option<f64>> {
        let value = parse_money(raw).ok_or_else(|| {
            ExpenseError::InvalidInput(format!("`{}` is not a non-negative amount", raw.trim()))
        })?;
        let limit = if value > 0.0 { Some(value) } else { None };
        let mut config = self.load()?;
        config.monthly_limit = limit;
        self.save(&config)?;
        info!(?limit, "monthly limit updated");
        Ok(limit)
    }

    pub fn clear_limit(&self) -> Result<()> {
        let mut config = self.load()?;
        config.monthly_limit = None;
        self.save(&config)?;
        info!("monthly limit cleared");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("config.json"));
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn limit_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("config.json"));

        assert_eq!(manager.set_limit("250.5").unwrap(), Some(250.5));
        assert_eq!(manager.load().unwrap().monthly_limit, Some(250.5));

        assert_eq!(manager.set_limit("0").unwrap(), None);
        assert_eq!(manager.load().unwrap().monthly_limit, None);
    }

    #[test]
    fn invalid_limit_leaves_config_untouched() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("config.json"));
        manager.set_limit("100").unwrap();

        let err = manager.set_limit("-5").unwrap_err();
        assert!(matches!(err, ExpenseError::InvalidInput(_)));
        assert_eq!(manager.load().unwrap().monthly_limit, Some(100.0));
    }

    #[test]
    fn clear_limit_removes_threshold() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("config.json"));
        manager.set_limit("80").unwrap();
        manager.clear_limit().unwrap();
        assert!(manager.load().unwrap().monthly_limit.is_none());
    }
}
