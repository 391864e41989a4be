// Error kinds that callers may want to match on. Transport and parse
// failures are carried as `anyhow::Error` and simply propagate.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The registry exposes this operation but the client does not support it yet.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
