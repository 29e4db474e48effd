use std::hash::Hasher;

use twox_hash::XxHash64;

const SEED: u64 = 0;

/// XXH64 of `bytes` with seed 0.
///
/// Routing decisions depend on this value, so it must never change between
/// releases.
#[inline]
pub fn hash64(bytes: impl AsRef<[u8]>) -> u64 {
    let mut h = XxHash64::with_seed(SEED);
    h.write(bytes.as_ref());
    h.finish()
}

/// XXH64 of `head` followed by `tail`, hashed as one stream.
#[inline]
pub fn hash64_pair(head: impl AsRef<[u8]>, tail: impl AsRef<[u8]>) -> u64 {
    let mut h = XxHash64::with_seed(SEED);
    h.write(head.as_ref());
    h.write(tail.as_ref());
    h.finish()
}

#[inline]
pub fn hash64_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("{:016x}", hash64(bytes))
}
