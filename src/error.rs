/// All errors that `kludgine-batch` can return.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// `begin` was called on a batch that is already recording, or a
    /// recording batch was submitted.
    #[error("sprite batch is already active")]
    AlreadyActive,
    /// `draw` or `end` was called on a batch that is not recording.
    #[error("sprite batch is not active: call begin first")]
    NotActive,
    /// The batch could not grow past its configured maximum.
    #[error("too many items: sprite batch is limited to {max_quads} quads")]
    CapacityExceeded {
        /// The maximum number of quads the batch was configured with.
        max_quads: usize,
    },
    /// A backend rejected a draw call while a batch was being submitted.
    #[error("backend error: {0}")]
    Backend(String),
    /// An error from user code arose.
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Returns true if this error was caused by calling `begin`, `draw`, or
    /// `end` out of order.
    #[must_use]
    pub const fn is_protocol_error(&self) -> bool {
        matches!(self, Self::AlreadyActive | Self::NotActive)
    }
}
