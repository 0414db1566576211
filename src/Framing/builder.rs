use super::marker::LengthMarker;
use super::shared::SharedMessageRing;
use super::MessageRing::FramedMessageBuffer;
use crate::Core::error::Result;

pub struct MessageRingBuilder {
    capacity: usize,
}

impl Default for MessageRingBuilder {
    fn default() -> Self {
        Self {
            capacity: 64 * 1024, // 64KB default
        }
    }
}

impl MessageRingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the backing store in bytes, length markers included.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn build<M: LengthMarker>(self) -> Result<FramedMessageBuffer<M>> {
        FramedMessageBuffer::with_capacity(self.capacity)
    }

    pub fn build_shared<M: LengthMarker>(self) -> Result<SharedMessageRing<M>> {
        self.build().map(SharedMessageRing::new)
    }
}
