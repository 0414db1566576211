use msgring::Core::ByteRing::ByteRingBuffer;
use msgring::Core::RingError;

fn assert_conserved(ring: &ByteRingBuffer) {
    assert_eq!(ring.bytes_used() + ring.bytes_free(), ring.capacity());
}

#[test]
fn create_and_destroy_lifecycle() {
    let mut ring = ByteRingBuffer::new();
    assert!(!ring.is_valid());
    assert_eq!(ring.capacity(), 0);

    ring.create(32).unwrap();
    assert!(ring.is_valid());
    assert!(ring.is_empty());
    assert_eq!(ring.capacity(), 32);
    assert_eq!(ring.bytes_free(), 32);
    assert_eq!(ring.bytes_used(), 0);

    ring.destroy();
    assert!(!ring.is_valid());
    assert_eq!(ring.capacity(), 0);
    assert_eq!(ring.bytes_free(), 0);

    // A destroyed buffer can be created again
    ring.create(8).unwrap();
    assert_eq!(ring.capacity(), 8);
}

#[test]
fn create_rejects_second_create_and_zero_capacity() {
    let mut ring = ByteRingBuffer::with_capacity(16).unwrap();
    assert_eq!(
        ring.create(32),
        Err(RingError::AlreadyCreated { capacity: 16 })
    );
    assert_eq!(ring.capacity(), 16);

    assert_eq!(
        ByteRingBuffer::with_capacity(0).unwrap_err(),
        RingError::ZeroCapacity
    );
}

#[test]
fn push_then_pop_returns_the_same_bytes() {
    let mut ring = ByteRingBuffer::with_capacity(16).unwrap();
    assert!(ring.push(b"abc"));
    assert!(ring.push(b"defg"));
    assert_eq!(ring.bytes_used(), 7);
    assert_conserved(&ring);

    let mut out = [0u8; 7];
    assert!(ring.pop(&mut out));
    assert_eq!(&out, b"abcdefg");
    assert!(ring.is_empty());
    assert_conserved(&ring);
}

#[test]
fn push_fails_only_when_larger_than_free_space() {
    let mut ring = ByteRingBuffer::with_capacity(10).unwrap();
    assert!(ring.push(&[1; 6]));

    assert!(!ring.push(&[2; 5]));
    assert_eq!(ring.bytes_used(), 6);
    assert_eq!(ring.bytes_free(), 4);

    assert!(ring.push(&[2; 4]));
    assert_eq!(ring.bytes_free(), 0);
    assert!(!ring.push(&[3]));
    assert_conserved(&ring);
}

#[test]
fn pop_fails_when_not_enough_data() {
    let mut ring = ByteRingBuffer::with_capacity(10).unwrap();
    assert!(ring.push(&[7; 3]));

    let mut out = [0u8; 4];
    assert!(!ring.pop(&mut out));
    assert_eq!(out, [0; 4]);
    assert_eq!(ring.bytes_used(), 3);

    let mut out = [0u8; 3];
    assert!(ring.pop(&mut out));
    assert_eq!(out, [7; 3]);
}

#[test]
fn empty_chunks_are_no_ops() {
    let mut ring = ByteRingBuffer::with_capacity(4).unwrap();
    assert!(ring.push(&[]));
    assert!(ring.pop(&mut []));
    assert!(ring.is_empty());
    assert_eq!(ring.save_checkpoint().head(), 0);
}

#[test]
fn chunk_crossing_the_end_comes_back_intact() {
    let mut ring = ByteRingBuffer::with_capacity(10).unwrap();
    let mut sink = [0u8; 7];
    assert!(ring.push(&[0; 7]));
    assert!(ring.pop(&mut sink));

    // Starts at offset 7, wraps after 3 bytes
    let data = [10, 11, 12, 13, 14, 15, 16, 17];
    assert!(ring.push(&data));
    let cp = ring.save_checkpoint();
    assert_eq!(cp.head(), 5);
    assert_eq!(cp.tail(), 7);

    let mut out = [0u8; 8];
    assert!(ring.pop(&mut out));
    assert_eq!(out, data);
    assert_eq!(ring.save_checkpoint().tail(), 5);
    assert!(ring.is_empty());
}

#[test]
fn peek_does_not_consume() {
    let mut ring = ByteRingBuffer::with_capacity(8).unwrap();
    assert!(ring.push(b"xyz"));

    let mut out = [0u8; 2];
    assert!(ring.peek(&mut out));
    assert_eq!(&out, b"xy");
    assert_eq!(ring.bytes_used(), 3);

    let mut out = [0u8; 3];
    assert!(ring.pop(&mut out));
    assert_eq!(&out, b"xyz");
}

#[test]
fn checkpoint_restores_cursors_and_free_space() {
    let mut ring = ByteRingBuffer::with_capacity(12).unwrap();
    assert!(ring.push(b"hello"));
    let cp = ring.save_checkpoint();
    assert_eq!(cp.free_space(), 7);

    let mut out = [0u8; 3];
    assert!(ring.pop(&mut out));
    assert_eq!(ring.bytes_used(), 2);

    ring.load_checkpoint(cp);
    assert_eq!(ring.save_checkpoint(), cp);
    assert_eq!(ring.bytes_used(), 5);

    let mut out = [0u8; 5];
    assert!(ring.pop(&mut out));
    assert_eq!(&out, b"hello");
}

#[test]
fn clear_rewinds_an_empty_ring() {
    let mut ring = ByteRingBuffer::with_capacity(8).unwrap();
    let mut out = [0u8; 5];
    assert!(ring.push(&[1; 5]));
    assert!(ring.pop(&mut out));
    assert_eq!(ring.save_checkpoint().head(), 5);

    ring.clear();
    let cp = ring.save_checkpoint();
    assert_eq!((cp.head(), cp.tail(), cp.free_space()), (0, 0, 8));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "ring still holds data")]
fn clear_with_data_buffered_is_a_contract_violation() {
    let mut ring = ByteRingBuffer::with_capacity(8).unwrap();
    assert!(ring.push(&[1; 2]));
    ring.clear();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "buffer was never created")]
fn destroy_before_create_is_a_contract_violation() {
    let mut ring = ByteRingBuffer::new();
    ring.destroy();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "checkpoint cursor outside the store")]
fn checkpoint_from_a_larger_ring_is_rejected() {
    // Free space fits an 8-byte store, the write cursor does not
    let mut big = ByteRingBuffer::with_capacity(32).unwrap();
    assert!(big.push(&[1; 28]));
    let check_point = big.save_checkpoint();
    assert_eq!((check_point.head(), check_point.free_space()), (28, 4));

    let mut small = ByteRingBuffer::with_capacity(8).unwrap();
    small.load_checkpoint(check_point);
}

#[test]
fn debug_output_shows_bookkeeping_only() {
    let mut ring = ByteRingBuffer::with_capacity(8).unwrap();
    assert!(ring.push(b"secret"));
    let text = format!("{:?}", ring);
    assert!(text.contains("capacity: 8"));
    assert!(text.contains("free_space: 2"));
    assert!(!text.contains("secret"));
}
