use std::collections::HashMap;

use tracing::debug;

use crate::{
    RingError, RingResult, Router, Shard,
    hash::{hash64, hash64_pair},
    ring::sorted_shards,
};

const MIX_MULTIPLIER: u64 = 2_685_821_657_736_338_717;

/// Rendezvous (highest random weight) router.
///
/// Each key is scored against every shard and goes to the highest score.
/// Removing a shard only moves the keys it owned, without any virtual nodes.
#[derive(Debug, Clone)]
pub struct Rendezvous {
    slots: Vec<Shard>,
    hashes: Vec<u64>,
    index: HashMap<Box<str>, usize>,
}

impl Rendezvous {
    pub fn new<I, N, A>(shards: I) -> RingResult<Self>
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        let initial = sorted_shards(shards)?;

        let mut router = Self {
            slots: Vec::with_capacity(initial.len()),
            hashes: Vec::with_capacity(initial.len()),
            index: HashMap::with_capacity(initial.len()),
        };

        for shard in initial {
            router.push(shard);
        }

        debug!(shards = router.slots.len(), "rendezvous router built");

        Ok(router)
    }

    fn push(&mut self, shard: Shard) {
        self.index
            .insert(Box::from(shard.name()), self.slots.len());
        self.hashes.push(hash64(shard.name()));
        self.slots.push(shard);
    }

    fn best_slot(&self, kh: u64) -> usize {
        let mut best = 0;
        let mut best_score = xorshift_mult64(kh ^ self.hashes[0]);

        for (i, nh) in self.hashes.iter().enumerate().skip(1) {
            let score = xorshift_mult64(kh ^ nh);
            if score > best_score {
                best = i;
                best_score = score;
            }
        }

        best
    }
}

/// Stateless rendezvous pick: the node with the highest
/// `hash64(key ++ node)`. Ties go to the earlier node.
///
/// Returns `None` when `nodes` is empty.
pub fn rendezvous_hash<'a, S: AsRef<str>>(key: &[u8], nodes: &'a [S]) -> Option<&'a str> {
    let mut best: Option<(&'a str, u64)> = None;

    for node in nodes {
        let node = node.as_ref();
        let score = hash64_pair(key, node);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((node, score));
        }
    }

    best.map(|(node, _)| node)
}

#[inline]
fn xorshift_mult64(mut x: u64) -> u64 {
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    x.wrapping_mul(MIX_MULTIPLIER)
}

impl Router for Rendezvous {
    fn lookup_hash(&self, hash: u64) -> &Shard {
        &self.slots[self.best_slot(hash)]
    }

    fn add_shard(&mut self, name: &str, address: &str) -> RingResult<()> {
        if name.is_empty() {
            return Err(RingError::Config("shard name is empty".to_string()));
        }

        if self.index.contains_key(name) {
            return Err(RingError::DuplicateShard(name.to_string()));
        }

        self.push(Shard::new(name, address));
        debug!(shard = name, slot = self.slots.len() - 1, "shard added");

        Ok(())
    }

    fn remove_shard(&mut self, name: &str) -> RingResult<Shard> {
        let Some(&idx) = self.index.get(name) else {
            return Err(RingError::NotFound(name.to_string()));
        };

        if self.slots.len() == 1 {
            return Err(RingError::Config(format!(
                "cannot remove {name}: it is the last shard"
            )));
        }

        self.index.remove(name);
        self.hashes.swap_remove(idx);
        let removed = self.slots.swap_remove(idx);

        // The former last shard now lives in the freed slot.
        if let Some(moved) = self.slots.get(idx) {
            self.index.insert(Box::from(moved.name()), idx);
        }

        debug!(shard = name, "shard removed");

        Ok(removed)
    }

    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn shard(&self, name: &str) -> Option<&Shard> {
        self.index.get(name).map(|&i| &self.slots[i])
    }

    fn shards(&self) -> Vec<&Shard> {
        let mut shards: Vec<&Shard> = self.slots.iter().collect();
        shards.sort_by(|a, b| a.name().cmp(b.name()));
        shards
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}
