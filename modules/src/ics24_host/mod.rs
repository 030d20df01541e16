//! ICS-24 host requirements: identifier formats and the paths under which
//! IBC state is stored.

pub mod error;
pub mod identifier;
pub mod path;
pub mod validate;

pub use path::{Path, IBC_QUERY_PATH};
