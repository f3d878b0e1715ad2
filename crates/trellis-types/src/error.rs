/// Errors from foundation type parsing.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// An identifier string was empty or malformed.
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
}
