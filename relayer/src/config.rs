//! Read and write the relayer configuration.
//!
//! The config file is YAML under `<home>/config/config.yaml` with three
//! top-level keys (`global`, `chains`, `paths`). It is loaded once at
//! startup and threaded through as a value; mutations rewrite the file
//! under the caller's single-writer discipline.

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path as FsPath, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::path::{Path, Paths};

/// Defaults for various fields
mod default {
    pub fn strategy() -> String {
        "naive".to_string()
    }

    pub fn timeout() -> String {
        "10s".to_string()
    }

    pub fn lite_cache_size() -> usize {
        20
    }

    pub fn max_ticks() -> u64 {
        100
    }

    pub fn gas() -> u64 {
        200_000
    }

    pub fn gas_adjustment() -> f64 {
        1.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
    #[serde(default)]
    pub paths: Paths,
}

/// Global relayer settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalConfig {
    #[serde(default = "default::strategy")]
    pub strategy: String,
    /// Tick period for the handshake drivers, as a duration string.
    #[serde(default = "default::timeout")]
    pub timeout: String,
    #[serde(default = "default::lite_cache_size")]
    pub lite_cache_size: usize,
    /// Upper bound on driver ticks before a handshake is abandoned.
    #[serde(default = "default::max_ticks")]
    pub max_ticks: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            strategy: default::strategy(),
            timeout: default::timeout(),
            lite_cache_size: default::lite_cache_size(),
            max_ticks: default::max_ticks(),
        }
    }
}

impl GlobalConfig {
    /// The driver tick period.
    pub fn timeout_duration(&self) -> Result<std::time::Duration, Error> {
        humantime::parse_duration(&self.timeout)
            .map_err(|_| Error::invalid_timeout(self.timeout.clone()))
    }
}

/// The config necessary for an individual chain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChainConfig {
    pub key: String,
    pub chain_id: String,
    pub rpc_addr: String,
    pub account_prefix: String,
    #[serde(default = "default::gas")]
    pub gas: u64,
    #[serde(default = "default::gas_adjustment")]
    pub gas_adjustment: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gas_prices: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_denom: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
    /// Go-style duration string, e.g. `336h`.
    pub trusting_period: String,
}

impl Config {
    /// Parses a config from its YAML representation.
    pub fn from_yaml(contents: &str) -> Result<Config, Error> {
        serde_yaml::from_str(contents).map_err(Error::config_decode)
    }

    /// Serialises the config to YAML.
    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(Error::config_encode)
    }

    /// Attempts to load and parse the config file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Config, Error> {
        let contents = fs::read_to_string(path).map_err(Error::config_io)?;
        Self::from_yaml(&contents)
    }

    /// Writes the config file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<FsPath>) -> Result<(), Error> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(Error::config_io)?;
        }
        fs::write(path, self.to_yaml()?).map_err(Error::config_io)
    }

    /// Returns the configuration for a given chain.
    pub fn get_chain(&self, chain_id: &str) -> Result<&ChainConfig, Error> {
        self.chains
            .iter()
            .find(|c| c.chain_id == chain_id)
            .ok_or_else(|| Error::chain_not_found(chain_id.to_string()))
    }

    /// Adds an additional chain to the config.
    pub fn add_chain(&mut self, chain: ChainConfig) {
        self.chains.push(chain);
    }

    /// Removes a chain from the config.
    pub fn delete_chain(&mut self, chain_id: &str) {
        self.chains.retain(|c| c.chain_id != chain_id);
    }

    /// Adds a path, rejecting duplicates.
    pub fn add_path(&mut self, path: Path) -> Result<(), Error> {
        self.paths.add(path)
    }
}

/// Home-directory layout shared by the config file, the key store, and the
/// per-chain light databases.
pub fn config_file(home: &FsPath) -> PathBuf {
    home.join("config").join("config.yaml")
}

pub fn keys_dir(home: &FsPath) -> PathBuf {
    home.join("keys")
}

pub fn lite_dir(home: &FsPath) -> PathBuf {
    home.join("lite")
}

/// A gas price as a decimal amount of a single denomination, e.g.
/// `0.025stake`.
#[derive(Clone, Debug, PartialEq)]
pub struct GasPrice {
    pub price: f64,
    pub denom: String,
}

impl FromStr for GasPrice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(|| Error::invalid_gas_prices(s.to_string()))?;

        let (amount, denom) = s.split_at(split);
        let price = f64::from_str(amount).map_err(|_| Error::invalid_gas_prices(s.to_string()))?;

        if denom.is_empty() {
            return Err(Error::invalid_gas_prices(s.to_string()));
        }

        Ok(GasPrice {
            price,
            denom: denom.to_string(),
        })
    }
}

impl Display for GasPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.price, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{ChainConfig, Config, GasPrice, GlobalConfig};
    use crate::path::{Path, PathEnd, StrategyCfg};

    fn sample_config() -> Config {
        let mut config = Config {
            global: GlobalConfig::default(),
            chains: vec![
                ChainConfig {
                    key: "testkey".to_string(),
                    chain_id: "ibc-zero".to_string(),
                    rpc_addr: "http://localhost:26657".to_string(),
                    account_prefix: "cosmos".to_string(),
                    gas: 200_000,
                    gas_adjustment: 1.0,
                    gas_prices: "0.025stake".to_string(),
                    default_denom: "stake".to_string(),
                    memo: String::new(),
                    trusting_period: "336h".to_string(),
                },
                ChainConfig {
                    key: "testkey".to_string(),
                    chain_id: "ibc-one".to_string(),
                    rpc_addr: "http://localhost:26557".to_string(),
                    account_prefix: "cosmos".to_string(),
                    gas: 200_000,
                    gas_adjustment: 1.0,
                    gas_prices: "0.025stake".to_string(),
                    default_denom: "stake".to_string(),
                    memo: String::new(),
                    trusting_period: "336h".to_string(),
                },
            ],
            paths: Default::default(),
        };

        let src = PathEnd {
            chain_id: "ibc-zero".to_string(),
            client_id: "ibconeclient".to_string(),
            connection_id: "ibconeconnection".to_string(),
            channel_id: "ibconechannel".to_string(),
            port_id: "transfer".to_string(),
        };
        let dst = PathEnd {
            chain_id: "ibc-one".to_string(),
            client_id: "ibczeroclient".to_string(),
            connection_id: "ibczeroconnection".to_string(),
            channel_id: "ibczerochannel".to_string(),
            port_id: "transfer".to_string(),
        };
        config
            .add_path(Path::new(src, dst, StrategyCfg::default()))
            .unwrap();

        config
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let config = sample_config();
        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn defaults_fill_missing_global_fields() {
        let config = Config::from_yaml("global: {}\nchains: []\npaths: []\n").unwrap();
        assert_eq!(config.global.strategy, "naive");
        assert_eq!(config.global.timeout, "10s");
        assert_eq!(config.global.lite_cache_size, 20);
    }

    #[test]
    fn chain_lookup_by_id() {
        let config = sample_config();
        assert!(config.get_chain("ibc-zero").is_ok());
        assert!(config.get_chain("ibc-two").is_err());
    }

    #[test]
    fn gas_price_parses_decimal_coin_expressions() {
        let gp = GasPrice::from_str("0.025stake").unwrap();
        assert!((gp.price - 0.025).abs() < f64::EPSILON);
        assert_eq!(gp.denom, "stake");

        assert!(GasPrice::from_str("stake").is_err());
        assert!(GasPrice::from_str("0.025").is_err());
        assert!(GasPrice::from_str("").is_err());
    }
}
