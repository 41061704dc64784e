use thiserror::Error;

/// Errors reported by the grid, the pattern catalog and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("unknown preset id {0} (expected 1-7)")]
    UnknownPreset(u8),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("grid dimensions must be at least 1x1")]
    EmptyGrid,
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
