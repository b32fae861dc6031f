use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid surface dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("sample length mismatch: expected {expected} values, got {actual}")]
    SeriesLengthMismatch { expected: usize, actual: usize },

    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
