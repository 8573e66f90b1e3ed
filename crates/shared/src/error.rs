use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{input}'; expected one of idle, assist, chat")]
pub struct ParseModeError {
    pub input: String,
}

impl ParseModeError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
