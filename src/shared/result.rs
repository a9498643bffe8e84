/// Crate-wide Result alias; errors propagate as `anyhow::Error` and carry
/// a `RecommendError` when the caller needs to tell failures apart.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
