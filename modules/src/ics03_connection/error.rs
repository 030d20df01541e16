use flex_error::define_error;

use crate::ics24_host::error::ValidationError;

define_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    Error {
        MissingCounterparty
            |_| { "raw connection end has no counterparty" },

        MissingCounterpartyPrefix
            |_| { "raw counterparty has no commitment prefix" },

        InvalidIdentifier
            [ ValidationError ]
            |_| { "identifier error" },

        EmptyVersions
            |_| { "connection end carries no versions" },
    }
}
