// Lock-guarded handle for using one message ring from several threads

use std::sync::Arc;

use parking_lot::Mutex;

use super::marker::LengthMarker;
use super::MessageRing::FramedMessageBuffer;
use crate::Core::error::FrameError;

/// A cloneable, thread-safe handle to a [`FramedMessageBuffer`].
///
/// Every call takes the lock once. Sequences that must not interleave with
/// other handles (peek then pop, or several pushes that belong together) go
/// through [`with_ring`](Self::with_ring).
pub struct SharedMessageRing<M: LengthMarker = u16> {
    inner: Arc<Mutex<FramedMessageBuffer<M>>>,
}

impl<M: LengthMarker> Clone for SharedMessageRing<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: LengthMarker> SharedMessageRing<M> {
    pub fn new(ring: FramedMessageBuffer<M>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ring)),
        }
    }

    pub fn push_msg(&self, data: &[u8]) -> Result<(), FrameError> {
        self.inner.lock().push_msg(data)
    }

    pub fn pop_msg(&self, dest: &mut [u8]) -> Result<usize, FrameError> {
        self.inner.lock().pop_msg(dest)
    }

    pub fn pop_msg_vec(&self) -> Result<Vec<u8>, FrameError> {
        self.inner.lock().pop_msg_vec()
    }

    pub fn num_msgs(&self) -> usize {
        self.inner.lock().num_msgs()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn bytes_used(&self) -> usize {
        self.inner.lock().bytes_used()
    }

    /// Run `f` with the lock held for its whole duration.
    pub fn with_ring<R>(&self, f: impl FnOnce(&mut FramedMessageBuffer<M>) -> R) -> R {
        let mut ring = self.inner.lock();
        f(&mut ring)
    }

    /// Number of live handles to the same ring.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Take the ring back once this is the last handle.
    pub fn into_inner(self) -> Option<FramedMessageBuffer<M>> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}

impl<M: LengthMarker> std::fmt::Debug for SharedMessageRing<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::Debug::StructDebug::debug_shared_ring(self, f)
    }
}
