//! Per-chain persistent light-client store.
//!
//! Each chain keeps a sled database under `<home>/lite/<chain-id>.db`
//! holding the light blocks the Tendermint light client has verified. The
//! operations here initialise that store from a trust anchor (or from the
//! configured node), advance it to the chain's head with bisection
//! verification, and read trusted headers back out in the form the on-chain
//! clients consume.
//!
//! Databases are opened per operation and released on drop; concurrent
//! opens (e.g. the background updater racing a foreground sync) surface as
//! store errors and are retried on the next tick.

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crossbeam_channel::Receiver;
use tendermint::block::Height as TMHeight;
use tendermint::{Hash, Time};
use tendermint_light_client::builder::LightClientBuilder;
use tendermint_light_client::light_client;
use tendermint_light_client::store::sled::SledStore;
use tendermint_light_client::store::LightStore;
use tendermint_light_client::supervisor::Instance;
use tendermint_light_client::types::{LightBlock, Status, TrustThreshold};
use tracing::warn;

use relayer_modules::ics07_tendermint::Header;
use relayer_modules::ics24_host::identifier::ChainId;

use crate::chain::Chain;
use crate::config::lite_dir;
use crate::error::Error;
use crate::util::join_pair;

/// Hard timeout applied to the light client's RPC fetches.
const LIGHT_CLIENT_RPC_TIMEOUT: Duration = Duration::from_secs(5);

/// Clock drift tolerated when checking header times.
const CLOCK_DRIFT: Duration = Duration::from_secs(5);

fn latest_trusted_or_verified(store: &dyn LightStore) -> Option<LightBlock> {
    let trusted = store.highest(Status::Trusted);
    let verified = store.highest(Status::Verified);

    match (trusted, verified) {
        (Some(t), Some(v)) => {
            if t.signed_header.header.height >= v.signed_header.header.height {
                Some(t)
            } else {
                Some(v)
            }
        }
        (t, v) => t.or(v),
    }
}

fn trusted_or_verified(store: &dyn LightStore, height: TMHeight) -> Option<LightBlock> {
    store
        .get(height, Status::Trusted)
        .or_else(|| store.get(height, Status::Verified))
}

/// Drops every stored block whose header fell out of the trusting period.
fn remove_expired_blocks(store: &mut dyn LightStore, trusting_period: Duration) {
    let now = Time::now();

    for status in [Status::Trusted, Status::Verified] {
        let expired: Vec<TMHeight> = store
            .all(status)
            .filter(|lb| {
                now.duration_since(lb.signed_header.header.time)
                    .map(|age| age > trusting_period)
                    .unwrap_or(false)
            })
            .map(|lb| lb.signed_header.header.height)
            .collect();

        for height in expired {
            store.remove(height, status);
        }
    }
}

impl Chain {
    /// Path of this chain's light database.
    pub fn light_db_path(&self) -> PathBuf {
        lite_dir(self.home()).join(format!("{}.db", self.id()))
    }

    fn open_light_store(&self) -> Result<SledStore, Error> {
        let db = sled::open(self.light_db_path()).map_err(Error::store)?;
        Ok(SledStore::new(db))
    }

    fn light_client_options(&self) -> light_client::Options {
        light_client::Options {
            trust_threshold: TrustThreshold::default(),
            trusting_period: self.trusting_period(),
            clock_drift: CLOCK_DRIFT,
        }
    }

    /// Builds a verifying light-client instance over the given store,
    /// optionally re-anchoring it at a `(height, hash)` pair.
    fn build_light_client(
        &self,
        store: SledStore,
        anchor: Option<(u64, Hash)>,
    ) -> Result<Instance, Error> {
        let instance_err =
            |e: &dyn std::fmt::Display| Error::light_client_instance(self.rpc_addr().to_string(), e.to_string());

        let status = self
            .block_on(tendermint_rpc::Client::status(self.rpc_client()))
            .map_err(|e| Error::rpc(self.rpc_addr().to_string(), e))?;

        let builder = LightClientBuilder::prod(
            status.node_info.id,
            self.rpc_client().clone(),
            Box::new(store),
            self.light_client_options(),
            Some(LIGHT_CLIENT_RPC_TIMEOUT),
        );

        let builder = match anchor {
            Some((height, hash)) => {
                let height = TMHeight::try_from(height).map_err(|_| Error::invalid_height())?;
                builder
                    .trust_primary_at(height, hash)
                    .map_err(|e| instance_err(&e))?
            }
            None => builder.trust_from_store().map_err(|e| instance_err(&e))?,
        };

        Ok(builder.build())
    }

    /// Initialises (or re-anchors) the light store at the supplied trusted
    /// `(height, hash)` pair. The anchor header must lie within the
    /// configured trusting period.
    pub fn init_light_client(&self, height: u64, hash: Hash) -> Result<u64, Error> {
        let store = self.open_light_store()?;
        let instance = self.build_light_client(store, Some((height, hash)))?;

        let latest = latest_trusted_or_verified(instance.state.light_store.as_ref())
            .ok_or_else(Error::lite_not_initialized)?;

        Ok(latest.signed_header.header.height.value())
    }

    /// Initialises the light store by trusting the configured node's
    /// current head. `force` records that the operator skipped the
    /// interactive acknowledgement; without it the blind trust is still
    /// performed but flagged in the log.
    pub fn init_light_client_from_trusted_node(&self, force: bool) -> Result<u64, Error> {
        if !force {
            warn!(
                "[{}] trusting hash and height from {} without verification",
                self.id(),
                self.rpc_addr()
            );
        }

        let height = self.query_latest_height()?;

        let commit = self
            .block_on(tendermint_rpc::Client::commit(
                self.rpc_client(),
                TMHeight::try_from(height).map_err(|_| Error::invalid_height())?,
            ))
            .map_err(|e| Error::rpc(self.rpc_addr().to_string(), e))?;

        let hash = commit.signed_header.header.hash();

        self.init_light_client(height, hash)
    }

    /// Syncs the light store with the chain head: removes headers that fell
    /// out of the trusting period, then verifies up to the primary
    /// provider's highest block. Idempotent.
    pub fn update_light_client(&self) -> Result<LightBlock, Error> {
        let mut store = self.open_light_store()?;

        remove_expired_blocks(&mut store, self.trusting_period());

        if latest_trusted_or_verified(&store).is_none() {
            return Err(Error::lite_not_initialized());
        }

        let mut instance = self.build_light_client(store, None)?;

        instance
            .light_client
            .verify_to_highest(&mut instance.state)
            .map_err(|e| Error::light_client(self.rpc_addr().to_string(), e))
    }

    /// Calls [`Chain::update_light_client`] and returns the resulting
    /// latest trusted header.
    pub fn update_lite_with_header(&self) -> Result<Header, Error> {
        self.update_light_client()?;
        self.latest_light_header()
    }

    /// The highest trusted height, or `-1` when the store was never
    /// initialised.
    pub fn latest_light_height(&self) -> Result<i64, Error> {
        if !self.light_db_path().exists() {
            return Ok(-1);
        }

        let store = self.open_light_store()?;
        Ok(latest_trusted_or_verified(&store)
            .map(|lb| lb.signed_header.header.height.value() as i64)
            .unwrap_or(-1))
    }

    /// Returns the trusted header at the given height. A miss triggers one
    /// sync against the primary before giving up with `NotTrusted`.
    pub fn light_header_at(&self, height: u64) -> Result<Header, Error> {
        let tm_height = TMHeight::try_from(height).map_err(|_| Error::invalid_height())?;

        let block = {
            let store = self.open_light_store()?;
            trusted_or_verified(&store, tm_height)
            // store must be released before update reopens the database
        };

        let block = match block {
            Some(block) => block,
            None => {
                self.update_light_client()?;
                let store = self.open_light_store()?;
                trusted_or_verified(&store, tm_height)
                    .ok_or_else(|| Error::not_trusted(height))?
            }
        };

        self.header_from_block(block)
    }

    /// The header to use for client creation and updates: the latest block
    /// in the trusted store.
    pub fn latest_light_header(&self) -> Result<Header, Error> {
        let height = self.latest_light_height()?;
        if height < 0 {
            return Err(Error::lite_not_initialized());
        }
        self.light_header_at(height as u64)
    }

    fn header_from_block(&self, block: LightBlock) -> Result<Header, Error> {
        let header = Header {
            signed_header: block.signed_header,
            validator_set: block.validators,
            next_validator_set: block.next_validators,
        };

        header.validate_basic(self.id()).map_err(Error::ics07)?;
        Ok(header)
    }

    /// Removes all persisted light-client state, forcing re-initialisation.
    pub fn delete_light_client(&self) -> Result<(), Error> {
        match fs::remove_dir_all(self.light_db_path()) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(Error::io(e)),
            _ => Ok(()),
        }
    }
}

/// Spawns a background task that re-syncs the chain's light store every
/// `period` until the `done` channel closes. Errors are logged, never
/// fatal.
pub fn start_light_client_updates(
    chain: Chain,
    period: Duration,
    done: Receiver<()>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let ticker = crossbeam_channel::tick(period);
        loop {
            crossbeam_channel::select! {
                recv(ticker) -> _ => {
                    if let Err(e) = chain.update_light_client() {
                        warn!("[{}] failed to update light client: {}", chain.id(), e);
                    }
                }
                recv(done) -> _ => return,
            }
        }
    })
}

/// Syncs both chains' light stores in parallel, then reads back both latest
/// trusted headers, likewise in parallel. A single failure aborts the pair
/// and names the chain that failed.
pub fn updates_with_headers(src: &Chain, dst: &Chain) -> Result<HashMap<ChainId, Header>, Error> {
    let annotate = |chain: &Chain| {
        let chain_id = chain.id().to_string();
        move |e: Error| Error::chain_query(chain_id, e.to_string())
    };

    join_pair(
        || src.update_light_client().map_err(annotate(src)),
        || dst.update_light_client().map_err(annotate(dst)),
    )?;

    let (src_header, dst_header) = join_pair(
        || src.latest_light_header().map_err(annotate(src)),
        || dst.latest_light_header().map_err(annotate(dst)),
    )?;

    let mut headers = HashMap::with_capacity(2);
    headers.insert(src.id().clone(), src_header);
    headers.insert(dst.id().clone(), dst_header);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tendermint_light_client::store::memory::MemoryStore;
    use tendermint_light_client::store::LightStore;
    use tendermint_light_client::types::{LightBlock, Status};
    use tendermint_testgen::{Generator, LightBlock as TestgenLightBlock};

    use super::{latest_trusted_or_verified, remove_expired_blocks, trusted_or_verified};

    fn light_block(height: u64) -> LightBlock {
        let block = TestgenLightBlock::new_default(height).generate().unwrap();
        LightBlock::new(
            block.signed_header,
            block.validators,
            block.next_validators,
            block.provider,
        )
    }

    #[test]
    fn latest_picks_the_highest_across_statuses() {
        let mut store = MemoryStore::new();
        assert!(latest_trusted_or_verified(&store).is_none());

        store.insert(light_block(5), Status::Trusted);
        store.insert(light_block(9), Status::Verified);
        store.insert(light_block(7), Status::Trusted);

        let latest = latest_trusted_or_verified(&store).unwrap();
        assert_eq!(latest.signed_header.header.height.value(), 9);

        // verifying further blocks never lowers the latest height
        store.insert(light_block(11), Status::Verified);
        let latest = latest_trusted_or_verified(&store).unwrap();
        assert_eq!(latest.signed_header.header.height.value(), 11);
    }

    #[test]
    fn lookup_falls_back_from_trusted_to_verified() {
        let mut store = MemoryStore::new();
        store.insert(light_block(3), Status::Trusted);
        store.insert(light_block(4), Status::Verified);

        assert!(trusted_or_verified(&store, 3_u32.into()).is_some());
        assert!(trusted_or_verified(&store, 4_u32.into()).is_some());
        assert!(trusted_or_verified(&store, 5_u32.into()).is_none());
    }

    #[test]
    fn pruning_respects_the_trusting_period() {
        // pin the header times so the blocks' age is known
        let mut old = light_block(3);
        old.signed_header.header.time =
            tendermint::Time::from_unix_timestamp(1_577_836_800, 0).unwrap(); // 2020-01-01

        let mut store = MemoryStore::new();
        store.insert(old.clone(), Status::Trusted);
        store.insert(light_block(4), Status::Verified);

        // a century-long period: nothing is expired
        remove_expired_blocks(&mut store, Duration::from_secs(60 * 60 * 24 * 365 * 100));
        assert!(trusted_or_verified(&store, 3_u32.into()).is_some());
        assert!(trusted_or_verified(&store, 4_u32.into()).is_some());

        // an hour-long period: the pinned header is long stale
        remove_expired_blocks(&mut store, Duration::from_secs(60 * 60));
        assert!(trusted_or_verified(&store, 3_u32.into()).is_none());
    }
}
