//! Binary generators.

use bytes::Bytes;
use fabricate_core::Generator;
use rand::Rng;

/// Random byte vectors of exactly `length` bytes.
pub fn binary(length: usize) -> Generator<Vec<u8>> {
    Generator::new(move || {
        let mut buffer = vec![0u8; length];
        rand::thread_rng().fill(buffer.as_mut_slice());
        buffer
    })
}

/// Random immutable byte buffers of exactly `size` bytes.
pub fn byte_buffers(size: usize) -> Generator<Bytes> {
    binary(size).map(Bytes::from)
}

/// Single random bytes.
pub fn bytes() -> Generator<u8> {
    Generator::new(|| rand::thread_rng().gen())
}
