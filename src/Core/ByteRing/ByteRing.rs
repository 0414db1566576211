// This is the contiguous byte store shared by every higher layer

/// An immutable snapshot of the cursors and free-space counter of a
/// [`ByteRingBuffer`].
///
/// Taken with [`ByteRingBuffer::save_checkpoint`] before a multi-step read and
/// handed back to [`ByteRingBuffer::load_checkpoint`] to undo it. The store
/// content is not part of the snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Checkpoint {
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) free_space: usize,
}

impl Checkpoint {
    /// Write offset at the time of the snapshot.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Read offset at the time of the snapshot.
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Bytes available to write at the time of the snapshot.
    pub fn free_space(&self) -> usize {
        self.free_space
    }
}

/// A fixed-capacity ring of raw bytes.
///
/// The store is one contiguous allocation made by `create` and released by
/// `destroy` (or on drop). Chunks are copied in at `head` and out at `tail`,
/// splitting the copy in two when it crosses the end of the store.
///
/// ### Bookkeeping:
/// - `free_space` is tracked explicitly. `head == tail` happens both when the
///   ring is empty and when it is full, so the cursors alone cannot tell them
///   apart.
/// - `bytes_used() + bytes_free() == capacity()` holds after every call.
///
/// The type has no internal synchronization. Shared use needs an external
/// lock around every call, checkpoint save/load pairs included.
#[derive(Default)]
pub struct ByteRingBuffer {
    /// Backing store. Empty while the buffer is uninitialized.
    pub(crate) store: Box<[u8]>,

    /// Next byte to be written.
    pub(crate) head: usize,

    /// Next byte to be read.
    pub(crate) tail: usize,

    /// Bytes currently available to `push`.
    pub(crate) free_space: usize,
}
