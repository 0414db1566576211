use std::marker::PhantomData;

use super::marker::LengthMarker;
use crate::Core::ByteRing::ByteRingBuffer;

/// Whole, length-prefixed messages stored on top of a [`ByteRingBuffer`].
///
/// Every message is written as a `M`-sized little-endian length marker
/// followed by the payload. Reads are transactional: when the caller's
/// destination is too small the marker read is rolled back and the message
/// stays at the front of the ring.
///
/// `M` defaults to `u16`, giving messages of up to 65535 bytes and two bytes
/// of overhead each.
pub struct FramedMessageBuffer<M: LengthMarker = u16> {
    pub(crate) ring: ByteRingBuffer,

    /// Complete messages currently stored.
    pub(crate) nmsgs: usize,

    pub(crate) _marker: PhantomData<M>,
}

impl<M: LengthMarker> Default for FramedMessageBuffer<M> {
    fn default() -> Self {
        Self {
            ring: ByteRingBuffer::default(),
            nmsgs: 0,
            _marker: PhantomData,
        }
    }
}
