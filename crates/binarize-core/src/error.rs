/// Errors returned by input validation and the thresholding operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("image should be either 2 or 3-dimensional (got rank {rank})")]
    InvalidShape { rank: usize },

    #[error("unsupported channel count {channels} (expected 1, 3 or 4)")]
    UnsupportedChannels { channels: usize },

    #[error("invalid {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("invalid pixel buffer length (expected {expected} samples, got {got})")]
    BufferLength { expected: usize, got: usize },
}

impl ThresholdError {
    /// Build an `InvalidArgument` error for the named parameter.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the array shape (rank or channel layout).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidShape { .. } | Self::UnsupportedChannels { .. }
        )
    }

    /// True for errors caused by a scalar argument such as a threshold or window.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
