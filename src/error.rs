//! Errors returned while building trees or running sweeps.

/// Everything that can go wrong in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A tree was requested with a negative number of draws.
    #[error("can't generate a tree from {0} draws")]
    InvalidArgument(i64),
    /// A search cost was requested from a tree with no nodes.
    #[error("search cost is undefined for an empty tree")]
    EmptyTree,
    /// A metric name that isn't one of `height`, `leaves`, `ss` or `us`.
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    /// A sweep whose bounds, step or trial count make no sense.
    #[error("invalid sweep: {0}")]
    InvalidSweep(&'static str),
}

/// Shorthand for results with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
