use thiserror::Error;

/// Lifecycle errors raised while creating a ring buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// `create` was called on a buffer that already owns a store.
    #[error("ring buffer already created with {capacity} bytes")]
    AlreadyCreated { capacity: usize },

    /// A zero-byte store was requested.
    #[error("ring buffer capacity must be greater than zero")]
    ZeroCapacity,
}

/// Outcomes of the message framing layer that are not a successful push/pop.
///
/// `Full` and `Empty` are routine backpressure signals. `DestinationTooSmall`
/// leaves the message in place so the caller can retry with a larger slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Not enough free bytes for the length marker plus the payload.
    #[error("not enough free space: need {needed} bytes, {free} free")]
    Full { needed: usize, free: usize },

    /// The payload length does not fit the length marker.
    #[error("message of {len} bytes exceeds the marker limit of {max} bytes")]
    MessageTooLarge { len: usize, max: usize },

    /// No complete length marker is buffered.
    #[error("no message buffered")]
    Empty,

    /// The next message is longer than the destination slice. Nothing was consumed.
    #[error("destination holds {available} bytes but the next message needs {required}")]
    DestinationTooSmall { required: usize, available: usize },

    /// Byte-level state no longer matches the framing stream.
    #[error("framing stream corrupted: {0}")]
    Corrupted(&'static str),
}

pub type Result<T, E = RingError> = std::result::Result<T, E>;
