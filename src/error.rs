use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid snapshot: duplicate key `{key}`")]
    DuplicateKey { key: String },

    #[error("invalid snapshot: value for key `{key}` is not a finite number")]
    NonNumericValue { key: String },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ChartError {
    /// Returns `true` for every variant raised while validating a data snapshot.
    #[must_use]
    pub fn is_invalid_snapshot(&self) -> bool {
        matches!(
            self,
            Self::DuplicateKey { .. } | Self::NonNumericValue { .. } | Self::InvalidSnapshot(_)
        )
    }
}
