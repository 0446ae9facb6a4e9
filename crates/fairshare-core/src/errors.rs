/// Errors surfaced by the fairshare allocation engine.
///
/// All variants are local precondition violations: computation itself is pure
/// and deterministic, so a caller that corrects its input and re-invokes will
/// succeed. `recalculate` never fails — validation happens at construction.
#[derive(Debug, thiserror::Error)]
pub enum FairshareError {
    #[error("invalid pool configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("pool index {index} out of bounds for {len} pools")]
    InvalidIndex { index: usize, len: usize },

    #[error("config parse error: {message}")]
    ConfigParse { message: String },
}

/// Result alias used across the workspace.
pub type FairshareResult<T> = Result<T, FairshareError>;
