use std::fmt;

use tracing::debug;

use super::ByteRing::{ByteRingBuffer, Checkpoint};
use crate::Core::error::{Result, RingError};

impl ByteRingBuffer {
    /// An uninitialized buffer. Call [`create`](Self::create) before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a buffer holding `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut ring = Self::new();
        ring.create(capacity)?;
        Ok(ring)
    }

    /// Allocate the backing store and reset the cursors.
    ///
    /// # Errors
    /// * `RingError::AlreadyCreated` if the buffer already owns a store
    /// * `RingError::ZeroCapacity` if `capacity` is 0
    pub fn create(&mut self, capacity: usize) -> Result<()> {
        if self.is_valid() {
            return Err(RingError::AlreadyCreated {
                capacity: self.capacity(),
            });
        }
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }

        self.store = vec![0u8; capacity].into_boxed_slice();
        self.head = 0;
        self.tail = 0;
        self.free_space = capacity;

        debug!(capacity, "byte ring created");
        Ok(())
    }

    /// Release the backing store and return to the uninitialized state.
    pub fn destroy(&mut self) {
        debug_assert!(
            self.is_valid(),
            "ByteRingBuffer::destroy(): buffer was never created"
        );
        let capacity = self.capacity();

        self.store = Box::default();
        self.free_space = 0;
        self.clear();

        debug!(capacity, "byte ring destroyed");
    }

    pub fn save_checkpoint(&self) -> Checkpoint {
        Checkpoint {
            head: self.head,
            tail: self.tail,
            free_space: self.free_space,
        }
    }

    /// Restore cursors and free space from a previous [`save_checkpoint`](Self::save_checkpoint).
    pub fn load_checkpoint(&mut self, check_point: Checkpoint) {
        debug_assert!(
            check_point.free_space <= self.capacity(),
            "ByteRingBuffer::load_checkpoint(): checkpoint free space exceeds the store"
        );
        debug_assert!(
            self.capacity() == 0
                || (check_point.head < self.capacity() && check_point.tail < self.capacity()),
            "ByteRingBuffer::load_checkpoint(): checkpoint cursor outside the store"
        );
        self.head = check_point.head;
        self.tail = check_point.tail;
        self.free_space = check_point.free_space;
    }

    /// Rewind both cursors to the start of the store.
    ///
    /// `free_space` is left alone, so this is only sound while the ring holds
    /// no data. Calling it with bytes buffered desynchronizes the cursors from
    /// the content.
    pub fn clear(&mut self) {
        debug_assert_eq!(
            self.bytes_used(),
            0,
            "ByteRingBuffer::clear(): ring still holds data"
        );
        self.head = 0;
        self.tail = 0;
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.store.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free_space == self.capacity()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn bytes_used(&self) -> usize {
        self.capacity() - self.free_space
    }

    #[inline]
    pub fn bytes_free(&self) -> usize {
        self.free_space
    }

    /// Copy `data` into the ring.
    ///
    /// Returns `false` without touching anything when `data` is longer than
    /// the free space. An empty slice is accepted and changes nothing.
    pub fn push(&mut self, data: &[u8]) -> bool {
        let size = data.len();
        if size > self.free_space {
            return false;
        }
        if size == 0 {
            return true;
        }
        debug_assert!(
            self.is_valid(),
            "ByteRingBuffer::push(): buffer was never created"
        );

        self.free_space -= size;

        let bytes_to_wrap = self.capacity() - self.head;
        if bytes_to_wrap >= size {
            self.store[self.head..self.head + size].copy_from_slice(data);
            self.head = (self.head + size) % self.capacity();
        } else {
            // Split the chunk across the end of the store
            let (front, back) = data.split_at(bytes_to_wrap);
            self.store[self.head..].copy_from_slice(front);
            self.store[..back.len()].copy_from_slice(back);
            self.head = back.len();
        }
        true
    }

    /// Fill `data` from the ring and release the bytes.
    ///
    /// Returns `false` without touching anything when fewer than `data.len()`
    /// bytes are buffered.
    pub fn pop(&mut self, data: &mut [u8]) -> bool {
        if !self.peek(data) {
            return false;
        }
        let size = data.len();
        if size == 0 {
            return true;
        }

        self.tail = (self.tail + size) % self.capacity();
        self.free_space += size;
        true
    }

    /// Fill `data` from the ring without consuming anything.
    pub fn peek(&self, data: &mut [u8]) -> bool {
        let size = data.len();
        if self.bytes_used() < size {
            return false;
        }
        if size == 0 {
            return true;
        }

        let bytes_to_wrap = self.capacity() - self.tail;
        if bytes_to_wrap >= size {
            data.copy_from_slice(&self.store[self.tail..self.tail + size]);
        } else {
            let (front, back) = data.split_at_mut(bytes_to_wrap);
            front.copy_from_slice(&self.store[self.tail..]);
            back.copy_from_slice(&self.store[..back.len()]);
        }
        true
    }
}

impl fmt::Debug for ByteRingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_byte_ring(self, f)
    }
}
