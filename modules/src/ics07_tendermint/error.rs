use flex_error::{define_error, DisplayOnly};

define_error! {
    Error {
        InvalidRawHeader
            [ DisplayOnly<tendermint::Error> ]
            |_| { "invalid raw header" },

        MissingSignedHeader
            |_| { "missing signed header in raw header" },

        MissingValidatorSet
            |_| { "missing validator set in raw header" },

        InvalidChainIdentifier
            {
                expected: String,
                got: String,
            }
            |e| {
                format!("header chain id {} does not match the expected chain id {}",
                    e.got, e.expected)
            },

        InvalidTimestamp
            { reason: String }
            |e| { format!("invalid header timestamp: {}", e.reason) },

        Decode
            { reason: String }
            |e| { format!("error decoding raw light client state: {}", e.reason) },

        InvalidHeight
            |_| { "height overflows the tendermint height bound" },
    }
}
