//! Key to shard routing.
//!
//! [`Ring`] is a consistent-hashing ring with virtual nodes; [`Rendezvous`]
//! is the highest-random-weight alternative. Both implement [`Router`] and
//! can be shared between threads through [`SharedRouter`].

pub mod error;
pub mod hash;
pub mod rendezvous;
pub mod ring;
pub mod router;
pub mod shard;
pub mod shared;

pub use error::{RingError, RingResult};
pub use hash::{hash64, hash64_hex, hash64_pair};
pub use rendezvous::{Rendezvous, rendezvous_hash};
pub use ring::{DEFAULT_VNODES_PER_SHARD, Ring};
pub use router::Router;
pub use shard::Shard;
pub use shared::SharedRouter;

#[cfg(test)]
mod tests;
