use thiserror::Error;

/// Which of the two history stacks an operation needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStack {
    Current,
    Redo,
}

impl std::fmt::Display for HistoryStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Redo => write!(f, "redo"),
        }
    }
}

/// Errors from undo/redo
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("nothing to move: the {0} stack is empty")]
    EmptyHistory(HistoryStack),
}

/// Errors raised at the configuration boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sector count {value} is outside 1..=60")]
    SectorCountOutOfRange { value: u32 },
    #[error("stroke width {value} is outside 1..=20")]
    StrokeWidthOutOfRange { value: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoilyError {
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
