/// Result alias carrying [`GlobeError`].
pub type Result<T> = std::result::Result<T, GlobeError>;

/// Errors surfaced by the globe core.
///
/// None of these are fatal to the hosting page: the front-end logs them and
/// falls back to a static placeholder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlobeError {
    #[error("label catalog is empty")]
    EmptyCatalog,

    #[error("label catalog entry {index} is blank")]
    BlankLabel { index: usize },

    #[error("label catalog contains duplicate entry {0:?}")]
    DuplicateLabel(String),

    #[error("host environment unavailable: {0}")]
    HostUnavailable(String),
}

impl GlobeError {
    pub fn host<T: Into<String>>(msg: T) -> Self {
        Self::HostUnavailable(msg.into())
    }
}
