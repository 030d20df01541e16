//! The chain handle: binds a configured identity (chain id, RPC endpoint,
//! key, gas policy, trusting period) to a signing client and the per-chain
//! light store.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use prost::Message as ProstMessage;
use prost_types::Any;
use tendermint::abci::Path as TendermintABCIPath;
use tendermint_rpc::{Client, HttpClient, Url};
use tokio::runtime::Runtime as TokioRuntime;

use relayer_modules::ics24_host::identifier::ChainId;
use relayer_modules::proto::cosmos::{
    mode_info, AuthInfo, BaseAccount, Coin, Fee, ModeInfo, PubKey, QueryAccountRequest,
    QueryAccountResponse, SignDoc, SignMode, SignerInfo, TxBody, TxRaw,
};
use relayer_modules::signer::Signer;

use crate::config::{keys_dir, ChainConfig, GasPrice};
use crate::error::Error;
use crate::keyring::KeyRing;
use crate::msgs::IbcMessage;
use crate::path::{PathEnd, PathType};

pub mod query;

use query::QueryResponse;

/// The settled result of a broadcast transaction. The raw log is dropped:
/// it restates the code and is noisy.
#[derive(Clone, Debug)]
pub struct TxResponse {
    pub height: u64,
    pub code: u32,
    pub codespace: String,
    pub hash: String,
}

impl TxResponse {
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

/// A blockchain as understood by the relayer.
#[derive(Clone, Debug)]
pub struct Chain {
    config: ChainConfig,
    id: ChainId,
    home: PathBuf,
    rpc_client: HttpClient,
    keybase: KeyRing,
    rt: Arc<TokioRuntime>,
    path_end: Option<PathEnd>,
    address: OnceCell<Signer>,
    trusting_period: Duration,
    gas_prices: GasPrice,
}

impl Chain {
    /// Builds a chain handle from its config. Validates the gas-prices
    /// expression, parses the trusting period, opens the keyring, and
    /// constructs the RPC client; the light client is initialised lazily by
    /// the operations in [`crate::light`].
    pub fn new(
        config: ChainConfig,
        home: impl Into<PathBuf>,
        rt: Arc<TokioRuntime>,
    ) -> Result<Chain, Error> {
        let home = home.into();

        let id = ChainId::from_str(&config.chain_id).map_err(Error::invalid_identifier)?;

        let gas_prices = if config.gas_prices.is_empty() {
            GasPrice {
                price: 0.0,
                denom: config.default_denom.clone(),
            }
        } else {
            GasPrice::from_str(&config.gas_prices)?
        };

        let trusting_period = humantime::parse_duration(&config.trusting_period).map_err(|_| {
            Error::invalid_trusting_period(config.trusting_period.clone(), config.chain_id.clone())
        })?;

        let keybase = KeyRing::new(keys_dir(&home), &id).map_err(Error::key_base)?;

        let url = Url::from_str(&config.rpc_addr)
            .map_err(|e| Error::chain_init(config.chain_id.clone(), e.to_string()))?;
        let rpc_client = HttpClient::new(url)
            .map_err(|e| Error::chain_init(config.chain_id.clone(), e.to_string()))?;

        Ok(Chain {
            config,
            id,
            home,
            rpc_client,
            keybase,
            rt,
            path_end: None,
            address: OnceCell::new(),
            trusting_period,
            gas_prices,
        })
    }

    /// The chain's identifier
    pub fn id(&self) -> &ChainId {
        &self.id
    }

    /// The chain's configuration
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn home(&self) -> &std::path::Path {
        &self.home
    }

    /// The trusting period configured for this chain
    pub fn trusting_period(&self) -> Duration {
        self.trusting_period
    }

    pub fn keybase(&self) -> &KeyRing {
        &self.keybase
    }

    pub(crate) fn rpc_client(&self) -> &HttpClient {
        &self.rpc_client
    }

    pub(crate) fn rpc_addr(&self) -> &str {
        &self.config.rpc_addr
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.rt.block_on(future)
    }

    /// Sets the relay path and validates the identifiers the given mode
    /// requires.
    pub fn set_path(&mut self, path: PathEnd, t: PathType) -> Result<(), Error> {
        path.validate(t)?;
        self.path_end = Some(path);
        Ok(())
    }

    /// Sets the path for client operations.
    pub fn path_client(&mut self, client_id: &str) -> Result<(), Error> {
        self.set_path(
            PathEnd {
                chain_id: self.id.to_string(),
                client_id: client_id.to_string(),
                ..Default::default()
            },
            PathType::Client,
        )
    }

    /// Sets the path for connection handshake operations.
    pub fn path_connection(&mut self, client_id: &str, connection_id: &str) -> Result<(), Error> {
        self.set_path(
            PathEnd {
                chain_id: self.id.to_string(),
                client_id: client_id.to_string(),
                connection_id: connection_id.to_string(),
                ..Default::default()
            },
            PathType::Connection,
        )
    }

    /// Sets the path for channel handshake operations.
    pub fn path_channel(&mut self, channel_id: &str, port_id: &str) -> Result<(), Error> {
        self.set_path(
            PathEnd {
                chain_id: self.id.to_string(),
                channel_id: channel_id.to_string(),
                port_id: port_id.to_string(),
                ..Default::default()
            },
            PathType::Channel,
        )
    }

    /// Sets all identifiers on the path.
    pub fn path_full(
        &mut self,
        client_id: &str,
        connection_id: &str,
        channel_id: &str,
        port_id: &str,
    ) -> Result<(), Error> {
        self.set_path(
            PathEnd {
                chain_id: self.id.to_string(),
                client_id: client_id.to_string(),
                connection_id: connection_id.to_string(),
                channel_id: channel_id.to_string(),
                port_id: port_id.to_string(),
            },
            PathType::Full,
        )
    }

    pub fn path_is_set(&self) -> bool {
        self.path_end.is_some()
    }

    /// The relay path installed on this chain. Relay operations require it;
    /// calling them without a path set is a programmer error.
    pub fn path_end(&self) -> Result<&PathEnd, Error> {
        self.path_end
            .as_ref()
            .ok_or_else(|| Error::path_not_set("full".to_string(), self.id.to_string()))
    }

    /// The account address for the configured key, derived once and
    /// memoised.
    pub fn get_address(&self) -> Result<Signer, Error> {
        if let Some(signer) = self.address.get() {
            return Ok(signer.clone());
        }

        let key = self.keybase.get_key(&self.config.key).map_err(Error::key_base)?;
        let signer = Signer::new(key.account);
        let _ = self.address.set(signer.clone());
        Ok(signer)
    }

    /// Used for brevity where the key is known to exist.
    pub fn must_get_address(&self) -> Signer {
        self.get_address()
            .unwrap_or_else(|e| panic!("no address for chain {}: {}", self.id, e))
    }

    /// Query the latest height the chain is at
    pub fn query_latest_height(&self) -> Result<u64, Error> {
        let status = self
            .block_on(self.rpc_client.status())
            .map_err(|e| Error::rpc(self.config.rpc_addr.clone(), e))?;

        Ok(status.sync_info.latest_block_height.value())
    }

    /// Performs a generic ABCI query against this chain's RPC endpoint.
    /// With `prove` set, the response must carry a Merkle proof, and the
    /// reported height is the one the proof verifies at: one above the
    /// height the state was read from.
    pub(crate) fn abci_query(
        &self,
        path: TendermintABCIPath,
        data: Vec<u8>,
        height: u64,
        prove: bool,
    ) -> Result<QueryResponse, Error> {
        let height_param = if height == 0 {
            None
        } else {
            Some(
                tendermint::block::Height::try_from(height).map_err(|_| Error::invalid_height())?,
            )
        };

        let response = self
            .block_on(self.rpc_client.abci_query(Some(path), data, height_param, prove))
            .map_err(|e| Error::rpc(self.config.rpc_addr.clone(), e))?;

        if !response.code.is_ok() {
            return Err(Error::abci_query(response));
        }

        if prove && response.proof.is_none() {
            return Err(Error::empty_response_proof());
        }

        Ok(QueryResponse {
            value: response.value,
            proof: response.proof.map(Into::into),
            height: response.height.value(),
        })
    }

    /// Retrieves the `(account number, sequence)` pair for the relayer's
    /// account via the auth module's query service.
    fn query_account(&self, address: &str) -> Result<BaseAccount, Error> {
        let path = TendermintABCIPath::from_str("/cosmos.auth.v1beta1.Query/Account")
            .map_err(|_| Error::grpc_response_param("query path".to_string()))?;

        let request = QueryAccountRequest {
            address: address.to_string(),
        };

        let response = self.abci_query(path, request.encode_to_vec(), 0, false)?;

        let account = QueryAccountResponse::decode(response.value.as_slice())
            .map_err(Error::decode)?
            .account
            .ok_or_else(|| Error::grpc_response_param("account".to_string()))?;

        BaseAccount::decode(account.value.as_slice()).map_err(Error::decode)
    }

    /// Builds, signs, and serialises a transaction carrying the given
    /// messages, using SIGN_MODE_DIRECT under the fixed test keyring.
    pub fn build_and_sign_tx(&self, msgs: &[IbcMessage]) -> Result<Vec<u8>, Error> {
        let signer = self.get_address()?;
        let key = self.keybase.get_key(&self.config.key).map_err(Error::key_base)?;
        let account = self.query_account(signer.as_str())?;

        let body = TxBody {
            messages: msgs.iter().map(|m| m.to_any()).collect(),
            memo: self.config.memo.clone(),
            timeout_height: 0,
            extension_options: Vec::new(),
            non_critical_extension_options: Vec::new(),
        };
        let body_bytes = body.encode_to_vec();

        let public_key = PubKey {
            key: key.public_key.clone(),
        };
        let public_key = Any {
            type_url: "/cosmos.crypto.secp256k1.PubKey".to_string(),
            value: public_key.encode_to_vec(),
        };

        let signer_info = SignerInfo {
            public_key: Some(public_key),
            mode_info: Some(ModeInfo {
                sum: Some(mode_info::Sum::Single(mode_info::Single {
                    mode: SignMode::Direct as i32,
                })),
            }),
            sequence: account.sequence,
        };

        let adjusted_gas = mul_ceil(self.config.gas, self.config.gas_adjustment);
        let auth_info = AuthInfo {
            signer_infos: vec![signer_info],
            fee: Some(Fee {
                amount: vec![calculate_fee(adjusted_gas, &self.gas_prices)],
                gas_limit: adjusted_gas,
                payer: String::new(),
                granter: String::new(),
            }),
        };
        let auth_info_bytes = auth_info.encode_to_vec();

        let sign_doc = SignDoc {
            body_bytes: body_bytes.clone(),
            auth_info_bytes: auth_info_bytes.clone(),
            chain_id: self.id.to_string(),
            account_number: account.account_number,
        };

        let signature = self
            .keybase
            .sign_msg(&self.config.key, &sign_doc.encode_to_vec())
            .map_err(Error::key_base)?;

        let tx_raw = TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![signature],
        };

        Ok(tx_raw.encode_to_vec())
    }

    /// Broadcasts signed transaction bytes and waits for the commit result.
    pub fn broadcast_tx_commit(&self, tx_bytes: Vec<u8>) -> Result<TxResponse, Error> {
        let response = self
            .block_on(self.rpc_client.broadcast_tx_commit(tx_bytes.into()))
            .map_err(|e| Error::rpc(self.config.rpc_addr.clone(), e))?;

        let (code, codespace) = if response.check_tx.code.is_err() {
            (
                response.check_tx.code.value(),
                response.check_tx.codespace.to_string(),
            )
        } else {
            (
                response.deliver_tx.code.value(),
                response.deliver_tx.codespace.to_string(),
            )
        };

        Ok(TxResponse {
            height: response.height.value(),
            code,
            codespace,
            hash: response.hash.to_string(),
        })
    }

    /// Wraps the messages in a signed transaction and broadcasts it.
    pub fn send_msgs(&self, msgs: &[IbcMessage]) -> Result<TxResponse, Error> {
        let tx_bytes = self.build_and_sign_tx(msgs)?;
        self.broadcast_tx_commit(tx_bytes)
    }

    pub fn send_msg(&self, msg: IbcMessage) -> Result<TxResponse, Error> {
        self.send_msgs(std::slice::from_ref(&msg))
    }
}

fn mul_ceil(gas: u64, adjustment: f64) -> u64 {
    if adjustment <= 1.0 {
        return gas;
    }
    (gas as f64 * adjustment).ceil() as u64
}

fn calculate_fee(gas: u64, gas_price: &GasPrice) -> Coin {
    let fee_amount = (gas as f64 * gas_price.price).ceil() as u64;

    Coin {
        denom: gas_price.denom.clone(),
        amount: fee_amount.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{calculate_fee, mul_ceil};
    use crate::config::GasPrice;

    #[test]
    fn gas_adjustment_rounds_up() {
        assert_eq!(mul_ceil(200_000, 1.0), 200_000);
        assert_eq!(mul_ceil(200_000, 1.3), 260_000);
        assert_eq!(mul_ceil(100_001, 1.5), 150_002);
        // adjustments below 1 never shrink the limit
        assert_eq!(mul_ceil(200_000, 0.5), 200_000);
    }

    #[test]
    fn fee_is_price_times_gas_rounded_up() {
        let price = GasPrice {
            price: 0.025,
            denom: "stake".to_string(),
        };

        let fee = calculate_fee(200_000, &price);
        assert_eq!(fee.denom, "stake");
        assert_eq!(fee.amount, "5000");

        let fee = calculate_fee(200_001, &price);
        assert_eq!(fee.amount, "5001");
    }
}
