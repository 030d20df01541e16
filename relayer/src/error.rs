//! This module defines the various errors that can be raised in the relayer.

use flex_error::{define_error, DisplayOnly};
use tendermint_light_client::errors::Error as LightClientError;
use tendermint_rpc::endpoint::abci_query::AbciQuery;
use tendermint_rpc::Error as TendermintRpcError;

use relayer_modules::ics03_connection::error::Error as Ics03Error;
use relayer_modules::ics04_channel::error::Error as Ics04Error;
use relayer_modules::ics07_tendermint::error::Error as Ics07Error;
use relayer_modules::ics20_transfer::Error as Ics20Error;
use relayer_modules::ics24_host::error::ValidationError;

use crate::keyring;

define_error! {
    Error {
        ConfigIo
            [ DisplayOnly<std::io::Error> ]
            |_| { "config I/O error" },

        Io
            [ DisplayOnly<std::io::Error> ]
            |_| { "I/O error" },

        ConfigDecode
            [ DisplayOnly<serde_yaml::Error> ]
            |_| { "invalid configuration" },

        ConfigEncode
            [ DisplayOnly<serde_yaml::Error> ]
            |_| { "invalid configuration" },

        ChainInit
            { chain_id: String, reason: String }
            |e| { format!("failed to initialise chain {}: {}", e.chain_id, e.reason) },

        ChainNotFound
            { chain_id: String }
            |e| { format!("chain with ID {} is not configured", e.chain_id) },

        Rpc
            { url: String }
            [ DisplayOnly<TendermintRpcError> ]
            |e| { format!("RPC error to endpoint {}", e.url) },

        AbciQuery
            { query: AbciQuery }
            |e| { format!("ABCI query returned an error: {:?}", e.query) },

        ChainQuery
            { chain_id: String, reason: String }
            |e| { format!("failed during a query to chain {}: {}", e.chain_id, e.reason) },

        EmptyResponseValue
            |_| { "empty response value" },

        EmptyResponseProof
            |_| { "empty response proof" },

        InvalidHeight
            |_| { "invalid height" },

        Decode
            [ DisplayOnly<prost::DecodeError> ]
            |_| { "error decoding protobuf" },

        LightClient
            { address: String }
            [ DisplayOnly<LightClientError> ]
            |e| { format!("light client error for RPC address {}", e.address) },

        LightClientInstance
            { address: String, reason: String }
            |e| {
                format!("failed to build a light client instance for RPC address {}: {}",
                    e.address, e.reason)
            },

        LiteNotInitialized
            |_| { "lite client is not initialized" },

        NotTrusted
            { height: u64 }
            |e| { format!("height {} is not in the trusted store", e.height) },

        Store
            [ DisplayOnly<sled::Error> ]
            |_| { "store error" },

        KeyBase
            [ keyring::Error ]
            |_| { "keybase error" },

        Ics03
            [ Ics03Error ]
            |_| { "ICS 03 error" },

        Ics04
            [ Ics04Error ]
            |_| { "ICS 04 error" },

        Ics07
            [ Ics07Error ]
            |_| { "ICS 07 error" },

        Ics20
            [ Ics20Error ]
            |_| { "ICS 20 error" },

        InvalidIdentifier
            [ ValidationError ]
            |_| { "invalid identifier" },

        MissingPathField
            { field: String }
            |e| { format!("path end is missing the {} identifier", e.field) },

        PathNotSet
            { path_type: String, chain_id: String }
            |e| { format!("path of type {} on chain {} not set", e.path_type, e.chain_id) },

        PathNotFound
            { src: String, dst: String }
            |e| { format!("failed to find path in config between chains {} and {}", e.src, e.dst) },

        AmbiguousPath
            { src: String, dst: String }
            |e| {
                format!("more than one path between {} and {} exists, please specify index",
                    e.src, e.dst)
            },

        SpuriousIndex
            { src: String, dst: String }
            |e| {
                format!("passed in an index where only one path exists between chains {} and {}",
                    e.src, e.dst)
            },

        PathIndexOutOfBounds
            { index: usize }
            |e| { format!("no path at index {}", e.index) },

        DuplicatePath
            |_| { "an equivalent path is already present in the config" },

        MissingPathEnd
            { chain_id: String }
            |e| { format!("path has no end on chain {}", e.chain_id) },

        MissingHeader
            { chain_id: String }
            |e| { format!("no trusted header available for chain {}", e.chain_id) },

        MissingClientState
            { chain_id: String }
            |e| { format!("no client state found on chain {}", e.chain_id) },

        DeliverTx
            {
                chain_id: String,
                code: u32,
                codespace: String,
            }
            |e| {
                format!("transaction on chain {} rejected with code {} in codespace {}",
                    e.chain_id, e.code, e.codespace)
            },

        GrpcResponseParam
            { param: String }
            |e| { format!("missing parameter in query response: {}", e.param) },

        RetryCeiling
            { ticks: u64 }
            |e| { format!("handshake did not reach quiescence in {} ticks", e.ticks) },

        InvalidGasPrices
            { price: String }
            |e| { format!("invalid gas prices expression: {}", e.price) },

        InvalidTimeout
            { value: String }
            |e| { format!("invalid timeout duration: {}", e.value) },

        InvalidTrustingPeriod
            { period: String, chain_id: String }
            |e| {
                format!("failed to parse duration ({}) for chain {}",
                    e.period, e.chain_id)
            },
    }
}
