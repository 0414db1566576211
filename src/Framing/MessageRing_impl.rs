use std::fmt;

use tracing::{trace, warn};

use super::marker::LengthMarker;
use super::MessageRing::FramedMessageBuffer;
use crate::Core::error::{FrameError, Result};

impl<M: LengthMarker> FramedMessageBuffer<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a message buffer over a `capacity`-byte store.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut ring = Self::new();
        ring.create(capacity)?;
        Ok(ring)
    }

    pub fn create(&mut self, capacity: usize) -> Result<()> {
        self.ring.create(capacity)?;
        self.nmsgs = 0;
        Ok(())
    }

    pub fn destroy(&mut self) {
        self.ring.destroy();
        self.nmsgs = 0;
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.ring.is_valid()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    #[inline]
    pub fn bytes_used(&self) -> usize {
        self.ring.bytes_used()
    }

    #[inline]
    pub fn bytes_free(&self) -> usize {
        self.ring.bytes_free()
    }

    #[inline]
    pub fn num_msgs(&self) -> usize {
        self.nmsgs
    }

    /// Longest payload a single `push_msg` can ever accept on this buffer.
    pub fn max_msg_len(&self) -> usize {
        M::MAX.min(self.capacity().saturating_sub(M::WIDTH))
    }

    /// Append one message.
    ///
    /// # Errors
    /// * `FrameError::MessageTooLarge` if the length does not fit the marker
    /// * `FrameError::Full` if the marker plus payload exceed the free space
    ///
    /// Nothing is written when an error is returned.
    pub fn push_msg(&mut self, data: &[u8]) -> Result<(), FrameError> {
        let marker = M::encode(data.len()).ok_or(FrameError::MessageTooLarge {
            len: data.len(),
            max: M::MAX,
        })?;

        let needed = data.len().saturating_add(M::WIDTH);
        let free = self.ring.bytes_free();
        if needed > free {
            return Err(FrameError::Full { needed, free });
        }

        let check_point = self.ring.save_checkpoint();
        let mut is_ok = self.ring.push(marker.as_ref());
        debug_assert!(is_ok, "marker push failed after capacity check");
        is_ok &= self.ring.push(data);
        debug_assert!(is_ok, "payload push failed after capacity check");
        if !is_ok {
            self.ring.load_checkpoint(check_point);
            warn!(
                len = data.len(),
                free, "push failed after capacity check, framing stream is inconsistent"
            );
            return Err(FrameError::Corrupted("push failed after capacity check"));
        }

        self.nmsgs += 1;
        Ok(())
    }

    /// Move the next message into the front of `dest` and return its length.
    ///
    /// # Errors
    /// * `FrameError::Empty` if no length marker is buffered
    /// * `FrameError::DestinationTooSmall` if the message is longer than
    ///   `dest`. The ring is rolled back and the same message is returned by
    ///   the next call that offers enough room.
    /// * `FrameError::Corrupted` if the marker announces more bytes than are
    ///   buffered. The ring is rolled back.
    pub fn pop_msg(&mut self, dest: &mut [u8]) -> Result<usize, FrameError> {
        if self.ring.bytes_used() < M::WIDTH {
            return Err(FrameError::Empty);
        }

        let check_point = self.ring.save_checkpoint();
        let mut marker = M::Bytes::default();
        let is_ok = self.ring.pop(marker.as_mut());
        debug_assert!(is_ok);
        let msg_len = M::decode(&marker);

        if msg_len > dest.len() {
            self.ring.load_checkpoint(check_point);
            trace!(
                required = msg_len,
                available = dest.len(),
                "destination too small, message rolled back"
            );
            return Err(FrameError::DestinationTooSmall {
                required: msg_len,
                available: dest.len(),
            });
        }

        if !self.ring.pop(&mut dest[..msg_len]) {
            self.ring.load_checkpoint(check_point);
            warn!(
                msg_len,
                used = self.ring.bytes_used(),
                "length marker points past the buffered data"
            );
            return Err(FrameError::Corrupted(
                "length marker points past the buffered data",
            ));
        }

        self.nmsgs -= 1;
        debug_assert!(self.nmsgs > 0 || self.ring.is_empty());

        // Rewinding an empty ring keeps later messages from wrapping
        if self.nmsgs == 0 {
            self.ring.clear();
            trace!("last message popped, cursors rewound");
        }

        Ok(msg_len)
    }

    /// Length of the next message, without consuming it.
    pub fn peek_msg_len(&self) -> Option<usize> {
        let mut marker = M::Bytes::default();
        self.ring
            .peek(marker.as_mut())
            .then(|| M::decode(&marker))
    }

    /// Pop the next message into a freshly allocated `Vec`.
    ///
    /// # Errors
    /// * `FrameError::Empty` if no message is buffered
    /// * `FrameError::Corrupted` if the length marker does not match the data
    pub fn pop_msg_vec(&mut self) -> Result<Vec<u8>, FrameError> {
        let msg_len = self.peek_msg_len().ok_or(FrameError::Empty)?;
        let mut msg = vec![0u8; msg_len];
        let popped = self.pop_msg(&mut msg)?;
        debug_assert_eq!(popped, msg_len);
        Ok(msg)
    }
}

impl<M: LengthMarker> fmt::Debug for FramedMessageBuffer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_message_ring(self, f)
    }
}
