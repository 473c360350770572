#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("navigator has been disposed")]
    Disposed,

    #[error("navigation target must be an absolute path: {0:?}")]
    RelativeTarget(String),

    #[error("no history entry at offset {0}")]
    OutOfHistory(isize),
}
