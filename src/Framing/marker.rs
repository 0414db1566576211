// Fixed-width length prefixes written in front of every framed message

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer used as the length prefix of a framed message.
///
/// The width trades the longest storable message (`MAX`) against the
/// per-message overhead (`WIDTH` bytes). Markers are stored little-endian.
/// Implemented for `u8`, `u16`, `u32` and `u64`.
pub trait LengthMarker: sealed::Sealed + Copy + Send + 'static {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Longest payload the marker can describe.
    const MAX: usize;

    /// Raw encoded form.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Encode `len`, or `None` if it does not fit the marker.
    fn encode(len: usize) -> Option<Self::Bytes>;

    fn decode(bytes: &Self::Bytes) -> usize;
}

macro_rules! impl_length_marker {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl LengthMarker for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();
            const MAX: usize = if (<$ty>::MAX as u128) > (usize::MAX as u128) {
                usize::MAX
            } else {
                <$ty>::MAX as usize
            };

            type Bytes = [u8; std::mem::size_of::<$ty>()];

            #[inline]
            fn encode(len: usize) -> Option<Self::Bytes> {
                <$ty>::try_from(len).ok().map(<$ty>::to_le_bytes)
            }

            #[inline]
            fn decode(bytes: &Self::Bytes) -> usize {
                <$ty>::from_le_bytes(*bytes) as usize
            }
        }
    )*};
}

impl_length_marker!(u8, u16, u32, u64);
