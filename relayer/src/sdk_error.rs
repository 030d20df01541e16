//! Mapping from chain response codes to human-readable messages.
//!
//! A rejected transaction carries only a `(codespace, code)` pair; the
//! tables below recover the message the counterparty's module would have
//! logged, so the failure line in the relay log is actionable.

use flex_error::define_error;

define_error! {
    SdkError {
        Client
            [ ClientError ]
            |_| { "ICS02 client error" },

        Connection
            [ ConnectionError ]
            |_| { "ICS03 connection error" },

        Channel
            [ ChannelError ]
            |_| { "ICS04 channel error" },

        UnknownSdk
            {
                codespace: String,
                code: u32,
            }
            |e| { format!("unknown SDK error: codespace {}, code {}", e.codespace, e.code) },
    }
}

define_error! {
    ClientError {
        LightClientAlreadyExists
            |_| { "light client already exists" },

        InvalidLightClient
            |_| { "light client is invalid" },

        LightClientNotFound
            |_| { "light client not found" },

        FrozenLightClient
            |_| { "light client is frozen due to misbehaviour" },

        ConsensusStateNotFound
            |_| { "consensus state not found" },

        InvalidConsensusState
            |_| { "invalid consensus state" },

        ClientTypeNotFound
            |_| { "client type not found" },

        InvalidClientType
            |_| { "invalid client type" },

        CommitmentRootNotFound
            |_| { "commitment root not found" },

        InvalidClientHeader
            |_| { "invalid client header" },

        ClientStateVerificationFailed
            |_| { "client state verification failed" },

        ClientConsensusStateVerificationFailed
            |_| { "client consensus state verification failed" },

        ConnectionStateVerificationFailed
            |_| { "connection state verification failed" },

        ChannelStateVerificationFailed
            |_| { "channel state verification failed" },

        PacketCommitmentVerificationFailed
            |_| { "packet commitment verification failed" },

        SelfConsensusStateNotFound
            |_| { "self consensus state not found" },

        UpdateLightClientFailed
            |_| { "unable to update light client" },

        InvalidHeight
            |_| { "invalid height" },

        UnknownClient
            { code: u32 }
            |e| { format!("unknown client error: {}", e.code) },
    }
}

mod connection_error_mod {
    use flex_error::define_error;

    define_error! {
        ConnectionError {
            ConnectionAlreadyExists
                |_| { "connection already exists" },

            ConnectionNotFound
                |_| { "connection not found" },

            ClientConnectionPathsNotFound
                |_| { "light client connection paths not found" },

            ConnectionPathNotFound
                |_| { "connection path is not associated to the given light client" },

            InvalidConnectionState
                |_| { "invalid connection state" },

            InvalidCounterparty
                |_| { "invalid counterparty connection" },

            UnknownConnection
                { code: u32 }
                |e| { format!("unknown connection error: {}", e.code) },
        }
    }
}
pub use connection_error_mod::ConnectionError;

mod channel_error_mod {
    use flex_error::define_error;

    define_error! {
        ChannelError {
            ChannelAlreadyExists
                |_| { "channel already exists" },

            ChannelNotFound
                |_| { "channel not found" },

            InvalidChannel
                |_| { "invalid channel" },

            InvalidChannelState
                |_| { "invalid channel state" },

            InvalidChannelOrdering
                |_| { "invalid channel ordering" },

            InvalidCounterparty
                |_| { "invalid counterparty channel" },

            UnknownChannel
                { code: u32 }
                |e| { format!("unknown channel error: {}", e.code) },
        }
    }
}
pub use channel_error_mod::ChannelError;

// The error code mappings follow the `errors.go` registrations of the
// corresponding SDK modules.
fn client_error_from_code(code: u32) -> ClientError {
    match code {
        2 => ClientError::light_client_already_exists(),
        3 => ClientError::invalid_light_client(),
        4 => ClientError::light_client_not_found(),
        5 => ClientError::frozen_light_client(),
        7 => ClientError::consensus_state_not_found(),
        8 => ClientError::invalid_consensus_state(),
        9 => ClientError::client_type_not_found(),
        10 => ClientError::invalid_client_type(),
        11 => ClientError::commitment_root_not_found(),
        12 => ClientError::invalid_client_header(),
        14 => ClientError::client_state_verification_failed(),
        15 => ClientError::client_consensus_state_verification_failed(),
        16 => ClientError::connection_state_verification_failed(),
        17 => ClientError::channel_state_verification_failed(),
        18 => ClientError::packet_commitment_verification_failed(),
        22 => ClientError::self_consensus_state_not_found(),
        23 => ClientError::update_light_client_failed(),
        26 => ClientError::invalid_height(),
        _ => ClientError::unknown_client(code),
    }
}

fn connection_error_from_code(code: u32) -> ConnectionError {
    match code {
        2 => ConnectionError::connection_already_exists(),
        3 => ConnectionError::connection_not_found(),
        4 => ConnectionError::client_connection_paths_not_found(),
        5 => ConnectionError::connection_path_not_found(),
        6 => ConnectionError::invalid_connection_state(),
        7 => ConnectionError::invalid_counterparty(),
        _ => ConnectionError::unknown_connection(code),
    }
}

fn channel_error_from_code(code: u32) -> ChannelError {
    match code {
        2 => ChannelError::channel_already_exists(),
        3 => ChannelError::channel_not_found(),
        4 => ChannelError::invalid_channel(),
        5 => ChannelError::invalid_channel_state(),
        6 => ChannelError::invalid_channel_ordering(),
        7 => ChannelError::invalid_counterparty(),
        _ => ChannelError::unknown_channel(code),
    }
}

/// Resolves a non-zero `(codespace, code)` response pair to a message.
pub fn sdk_error_from_code(codespace: &str, code: u32) -> SdkError {
    match codespace {
        "client" => SdkError::client(client_error_from_code(code)),
        "connection" => SdkError::connection(connection_error_from_code(code)),
        "channel" => SdkError::channel(channel_error_from_code(code)),
        _ => SdkError::unknown_sdk(codespace.to_string(), code),
    }
}

#[cfg(test)]
mod tests {
    use super::sdk_error_from_code;

    #[test]
    fn known_codespaces_resolve() {
        let err = sdk_error_from_code("client", 4).to_string();
        assert!(err.contains("light client not found"));

        let err = sdk_error_from_code("connection", 2).to_string();
        assert!(err.contains("connection already exists"));

        let err = sdk_error_from_code("channel", 5).to_string();
        assert!(err.contains("invalid channel state"));
    }

    #[test]
    fn unknown_codespace_is_reported_verbatim() {
        let err = sdk_error_from_code("wasm", 9).to_string();
        assert!(err.contains("wasm"));
        assert!(err.contains('9'));
    }
}
