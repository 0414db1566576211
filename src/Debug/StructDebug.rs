use std::fmt;

use crate::Core::ByteRing::ByteRingBuffer;
use crate::Framing::marker::LengthMarker;
use crate::Framing::{FramedMessageBuffer, SharedMessageRing};

/// Debug function for ByteRingBuffer
///
/// Shows capacity, cursors and free space. The store content is never printed.
pub fn debug_byte_ring(ring: &ByteRingBuffer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ByteRingBuffer")
        .field("capacity", &ring.capacity())
        .field("head", &ring.head)
        .field("tail", &ring.tail)
        .field("free_space", &ring.free_space)
        .finish()
}

/// Debug function for FramedMessageBuffer
///
/// Shows:
/// - Length marker type and width
/// - Message count
/// - Underlying ByteRingBuffer details
pub fn debug_message_ring<M: LengthMarker>(
    ring: &FramedMessageBuffer<M>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_struct("FramedMessageBuffer")
        .field(
            "marker",
            &format_args!("{} ({} bytes)", std::any::type_name::<M>(), M::WIDTH),
        )
        .field("num_msgs", &ring.nmsgs)
        .field("ring", &ring.ring)
        .finish()
}

/// Debug function for SharedMessageRing
///
/// Reads only the handle count so formatting never blocks on the lock.
pub fn debug_shared_ring<M: LengthMarker>(
    ring: &SharedMessageRing<M>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_struct("SharedMessageRing")
        .field("handles", &ring.handle_count())
        .finish_non_exhaustive()
}
