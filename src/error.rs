use thiserror::Error;

/// A `Result` type that all fallible API calls in this crate will return.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible error cases that can be returned by API calls in this crate.
///
/// Construction is the only operation that fails loudly; queries degrade to
/// empty results instead of returning errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested branching factor cannot form a valid multiway node.
    #[error("illegal branching factor: {0}, must be greater than 2")]
    InvalidBranchingFactor(usize),
}
