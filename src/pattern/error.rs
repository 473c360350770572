#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{msg}")]
pub struct PatternError {
    msg: &'static str,
}

impl PatternError {
    pub(super) fn new(msg: &'static str) -> Self {
        Self { msg }
    }

    pub fn message(&self) -> &'static str {
        self.msg
    }
}
