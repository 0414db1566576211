//! A fixed-capacity byte ring buffer with a length-prefixed message layer.
//!
//! - [`Core::ByteRing::ByteRingBuffer`] stores opaque byte chunks in one
//!   contiguous allocation, wrapping copies across the end of the store.
//! - [`Framing::FramedMessageBuffer`] prefixes every chunk with a fixed-width
//!   length marker, counts messages and rolls a read back when the caller's
//!   destination is too small.
//!
//! ```
//! use msgring::Framing::{FramedMessageBuffer, MessageRingBuilder};
//!
//! let mut ring: FramedMessageBuffer<u16> = MessageRingBuilder::new()
//!     .with_capacity(64)
//!     .build()
//!     .unwrap();
//!
//! ring.push_msg(b"john\0").unwrap();
//! let mut dest = [0u8; 16];
//! assert_eq!(ring.pop_msg(&mut dest), Ok(5));
//! assert_eq!(&dest[..5], b"john\0");
//! ```

// Module naming follows project convention
#[allow(non_snake_case)]
pub mod Core {
    pub mod ByteRing {
        pub mod ByteRing;
        pub mod ByteRing_impl;
        pub use ByteRing::{ByteRingBuffer, Checkpoint}; // re-export for stable path
    }
    pub mod error;
    pub use error::{FrameError, Result, RingError};
}

#[allow(non_snake_case)]
pub mod Framing {
    pub mod MessageRing;
    pub mod MessageRing_impl;
    pub mod builder;
    pub mod marker;
    pub mod shared;

    pub use builder::MessageRingBuilder;
    pub use marker::LengthMarker;
    pub use shared::SharedMessageRing;
    pub use MessageRing::FramedMessageBuffer; // re-export for stable path
}

#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}

/// Message buffer with 16-bit length markers.
pub type MessageRing = Framing::FramedMessageBuffer<u16>;
