//! Relay paths: one [`PathEnd`] per chain, a [`Path`] pairing two ends with
//! a strategy tag, and the [`Paths`] collection stored in the config.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use relayer_modules::ics24_host::identifier::{
    ChainId, ChannelId, ClientId, ConnectionId, PortId,
};

use crate::error::Error;

/// Which identifiers of a [`PathEnd`] an operation relies on. Validation
/// checks exactly the fields the mode names and leaves the rest untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathType {
    /// chain id + client id
    Client,
    /// `Client` + connection id
    Connection,
    /// channel id + port id
    Channel,
    /// `Client` + `Channel`
    ClientChannel,
    /// all identifiers
    Full,
}

impl Display for PathType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Client => "client",
            Self::Connection => "connection",
            Self::Channel => "channel",
            Self::ClientChannel => "client-channel",
            Self::Full => "full",
        };
        write!(f, "{}", s)
    }
}

/// One chain's share of the identifiers for a relay path. Created empty,
/// filled in as handshakes assign identifiers, then treated as immutable for
/// the duration of a relay session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PathEnd {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub chain_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub connection_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub channel_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub port_id: String,
}

impl PathEnd {
    pub fn chain_id(&self) -> Result<ChainId, Error> {
        if self.chain_id.is_empty() {
            return Err(Error::missing_path_field("chain".to_string()));
        }
        ChainId::from_str(&self.chain_id).map_err(Error::invalid_identifier)
    }

    pub fn client_id(&self) -> Result<ClientId, Error> {
        if self.client_id.is_empty() {
            return Err(Error::missing_path_field("client".to_string()));
        }
        ClientId::from_str(&self.client_id).map_err(Error::invalid_identifier)
    }

    pub fn connection_id(&self) -> Result<ConnectionId, Error> {
        if self.connection_id.is_empty() {
            return Err(Error::missing_path_field("connection".to_string()));
        }
        ConnectionId::from_str(&self.connection_id).map_err(Error::invalid_identifier)
    }

    pub fn channel_id(&self) -> Result<ChannelId, Error> {
        if self.channel_id.is_empty() {
            return Err(Error::missing_path_field("channel".to_string()));
        }
        ChannelId::from_str(&self.channel_id).map_err(Error::invalid_identifier)
    }

    pub fn port_id(&self) -> Result<PortId, Error> {
        if self.port_id.is_empty() {
            return Err(Error::missing_path_field("port".to_string()));
        }
        PortId::from_str(&self.port_id).map_err(Error::invalid_identifier)
    }

    /// Validates the client identifier in the path
    pub fn vclient(&self) -> Result<(), Error> {
        self.client_id().map(|_| ())
    }

    /// Validates the connection identifier in the path
    pub fn vconn(&self) -> Result<(), Error> {
        self.connection_id().map(|_| ())
    }

    /// Validates the channel identifier in the path
    pub fn vchan(&self) -> Result<(), Error> {
        self.channel_id().map(|_| ())
    }

    /// Validates the port identifier in the path
    pub fn vport(&self) -> Result<(), Error> {
        self.port_id().map(|_| ())
    }

    /// Validates exactly those identifiers required by the given mode.
    pub fn validate(&self, t: PathType) -> Result<(), Error> {
        match t {
            PathType::Client => self.vclient(),
            PathType::Connection => {
                self.vclient()?;
                self.vconn()
            }
            PathType::Channel => {
                self.vchan()?;
                self.vport()
            }
            PathType::ClientChannel => {
                self.vclient()?;
                self.vchan()?;
                self.vport()
            }
            PathType::Full => {
                self.vclient()?;
                self.vconn()?;
                self.vchan()?;
                self.vport()
            }
        }
    }

    /// Returns true if both path ends are equivalent.
    pub fn equal(&self, other: &PathEnd) -> bool {
        self == other
    }
}

impl Display for PathEnd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client{{{}}}-conn{{{}}}-chan{{{}}}@chain{{{}}}:port{{{}}}",
            self.client_id, self.connection_id, self.channel_id, self.chain_id, self.port_id
        )
    }
}

/// Tag selecting the relay strategy for a path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCfg {
    #[serde(rename = "type")]
    pub strategy_type: String,
}

impl Default for StrategyCfg {
    fn default() -> Self {
        Self {
            strategy_type: "naive".to_string(),
        }
    }
}

/// A pair of chains and the identifiers needed to relay over them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub src: PathEnd,
    pub dst: PathEnd,
    #[serde(default)]
    pub strategy: StrategyCfg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Path {
    pub fn new(src: PathEnd, dst: PathEnd, strategy: StrategyCfg) -> Self {
        Self {
            src,
            dst,
            strategy,
            index: None,
        }
    }

    /// Checks that both ends carry a full set of valid identifiers.
    pub fn validate(&self) -> Result<(), Error> {
        self.src.validate(PathType::Full)?;
        self.dst.validate(PathType::Full)
    }

    /// Returns true if the path ends match as an unordered pair.
    pub fn equal(&self, other: &Path) -> bool {
        (self.src.equal(&other.src) || self.src.equal(&other.dst))
            && (self.dst.equal(&other.src) || self.dst.equal(&other.dst))
    }

    /// Returns the end whose chain id matches, or a definitive error when
    /// neither does.
    pub fn end(&self, chain_id: &str) -> Result<&PathEnd, Error> {
        if self.dst.chain_id == chain_id {
            return Ok(&self.dst);
        }
        if self.src.chain_id == chain_id {
            return Ok(&self.src);
        }
        Err(Error::missing_path_end(chain_id.to_string()))
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ->\n {}",
            self.index.map(|i| i.to_string()).unwrap_or_default(),
            self.src,
            self.dst
        )
    }
}

/// The connection paths between chains stored in the config.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paths(pub Vec<Path>);

impl Paths {
    /// Returns true if an equivalent path is already stored.
    pub fn duplicate(&self, path: &Path) -> bool {
        self.0.iter().any(|p| p.equal(path))
    }

    /// Appends a path, rejecting duplicates under unordered-pair equality.
    pub fn add(&mut self, path: Path) -> Result<(), Error> {
        if self.duplicate(&path) {
            return Err(Error::duplicate_path());
        }
        self.0.push(path);
        self.set_indices();
        Ok(())
    }

    /// Stamps each path with its position.
    pub fn set_indices(&mut self) {
        for (i, path) in self.0.iter_mut().enumerate() {
            path.index = Some(i);
        }
    }

    /// Returns every stored path whose endpoint chain ids equal the given
    /// pair, in insertion order with indices stamped.
    pub fn from_chains(&self, src: &str, dst: &str) -> Result<Paths, Error> {
        let mut out = Vec::new();
        for (i, path) in self.0.iter().enumerate() {
            if (path.dst.chain_id == src || path.src.chain_id == src)
                && (path.dst.chain_id == dst || path.src.chain_id == dst)
            {
                let mut found = path.clone();
                found.index = Some(i);
                out.push(found);
            }
        }

        if out.is_empty() {
            return Err(Error::path_not_found(src.to_string(), dst.to_string()));
        }
        Ok(Paths(out))
    }

    /// Resolves the single path between two chains, using the optional index
    /// to disambiguate. An index with a single candidate is as much an error
    /// as a missing index with several.
    pub fn select(&self, src: &str, dst: &str, index: Option<usize>) -> Result<Path, Error> {
        let found = self.from_chains(src, dst)?;

        match (index, found.0.len()) {
            (Some(i), n) if n > 1 => found
                .0
                .into_iter()
                .find(|p| p.index == Some(i))
                .ok_or_else(|| Error::path_index_out_of_bounds(i)),
            (Some(_), _) => Err(Error::spurious_index(src.to_string(), dst.to_string())),
            (None, 1) => Ok(found.0.into_iter().next().expect("one path")),
            (None, _) => Err(Error::ambiguous_path(src.to_string(), dst.to_string())),
        }
    }
}

impl Display for Paths {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for path in &self.0 {
            writeln!(f, "{}", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Path, PathEnd, PathType, Paths, StrategyCfg};
    use crate::error::ErrorDetail;

    fn end(chain: &str, client: &str) -> PathEnd {
        PathEnd {
            chain_id: chain.to_string(),
            client_id: client.to_string(),
            connection_id: "connectionidone".to_string(),
            channel_id: "channelidone".to_string(),
            port_id: "transfer".to_string(),
        }
    }

    fn path(a: &str, b: &str) -> Path {
        Path::new(
            end(a, "clienttoremote"),
            end(b, "clienttoremote"),
            StrategyCfg::default(),
        )
    }

    #[test]
    fn path_equality_is_unordered() {
        let forward = path("chain-a", "chain-b");
        let backward = Path::new(
            forward.dst.clone(),
            forward.src.clone(),
            StrategyCfg::default(),
        );
        assert!(forward.equal(&backward));
        assert!(backward.equal(&forward));
    }

    #[test]
    fn duplicates_are_rejected_either_way_round() {
        let mut paths = Paths::default();
        paths.add(path("chain-a", "chain-b")).unwrap();

        let reversed = Path::new(
            end("chain-b", "clienttoremote"),
            end("chain-a", "clienttoremote"),
            StrategyCfg::default(),
        );
        assert!(matches!(
            paths.add(reversed).unwrap_err().detail(),
            ErrorDetail::DuplicatePath(_)
        ));
    }

    #[test]
    fn validate_checks_only_requested_fields() {
        let mut e = PathEnd {
            chain_id: "chain-a".to_string(),
            client_id: "clienttoremote".to_string(),
            ..Default::default()
        };
        assert!(e.validate(PathType::Client).is_ok());
        assert!(e.validate(PathType::Connection).is_err());

        e.connection_id = "connectionidone".to_string();
        assert!(e.validate(PathType::Connection).is_ok());
        assert!(e.validate(PathType::Full).is_err());
    }

    #[test]
    fn end_picks_the_matching_side() {
        let p = path("chain-a", "chain-b");
        assert_eq!(p.end("chain-b").unwrap().chain_id, "chain-b");
        assert_eq!(p.end("chain-a").unwrap().chain_id, "chain-a");
        assert!(p.end("chain-c").is_err());
    }

    #[test]
    fn select_demands_an_index_only_with_multiple_candidates() {
        let mut paths = Paths::default();
        paths.add(path("chain-a", "chain-b")).unwrap();

        // one candidate: no index required, a spurious one is rejected
        assert!(paths.select("chain-a", "chain-b", None).is_ok());
        assert!(matches!(
            paths
                .select("chain-a", "chain-b", Some(0))
                .unwrap_err()
                .detail(),
            ErrorDetail::SpuriousIndex(_)
        ));

        // second candidate between the same chains (different channel)
        let mut second = path("chain-a", "chain-b");
        second.src.channel_id = "channelidtwo".to_string();
        paths.add(second).unwrap();

        assert!(matches!(
            paths
                .select("chain-a", "chain-b", None)
                .unwrap_err()
                .detail(),
            ErrorDetail::AmbiguousPath(_)
        ));
        let picked = paths.select("chain-a", "chain-b", Some(1)).unwrap();
        assert_eq!(picked.index, Some(1));
    }
}
