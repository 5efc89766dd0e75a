pub type ForwardListResult<T> = Result<T, ForwardListError>;

/// a position-taking operation was handed a position it cannot act on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardListError {
    /// the position is the end position, which has no node to act on
    PastTheEnd,
    /// the position is the last node, so there is nothing after it
    NoSuccessor,
}

impl core::fmt::Display for ForwardListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PastTheEnd => f.write_str("position is past the end of the list"),
            Self::NoSuccessor => f.write_str("position has no following element"),
        }
    }
}

#[cfg(not(feature = "no-std"))]
impl std::error::Error for ForwardListError {}
