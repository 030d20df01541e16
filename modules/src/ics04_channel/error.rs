use flex_error::define_error;

use crate::ics24_host::error::ValidationError;

define_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    Error {
        MissingCounterparty
            |_| { "raw channel end has no counterparty" },

        MissingPacket
            |_| { "raw message has no packet" },

        InvalidIdentifier
            [ ValidationError ]
            |_| { "identifier error" },

        UnknownOrdering
            { ordering: String }
            |e| { format!("unknown channel ordering: {}", e.ordering) },
    }
}
