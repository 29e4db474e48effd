use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::{RingError, RingResult, Router, Shard, hash::hash64};

pub const DEFAULT_VNODES_PER_SHARD: usize = 100;

/// Maps `(shard name, vnode index)` to a ring position.
pub(crate) type PositionFn = fn(&str, usize) -> u64;

fn vnode_position(name: &str, index: usize) -> u64 {
    hash64(format!("{name}#{index}"))
}

/// Consistent-hashing ring.
///
/// Every shard owns up to `vnodes_per_shard` positions on the `u64` circle.
/// A key belongs to the first position at or after its hash, wrapping
/// around to the smallest position.
#[derive(Debug, Clone)]
pub struct Ring {
    positions: BTreeMap<u64, Shard>,
    shards: BTreeMap<Box<str>, Shard>,
    vnodes_per_shard: usize,
    position: PositionFn,
}

impl Ring {
    /// Builds a ring from `name -> address` pairs.
    ///
    /// Shards are inserted in name order, so position collisions are always
    /// won by the lexicographically smaller name.
    pub fn new<I, N, A>(shards: I, vnodes_per_shard: usize) -> RingResult<Self>
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        Self::build(shards, vnodes_per_shard, vnode_position)
    }

    /// Same as [`Ring::new`] with a custom position function, so tests can
    /// force vnode collisions.
    #[cfg(test)]
    pub(crate) fn with_position_fn<I, N, A>(
        shards: I,
        vnodes_per_shard: usize,
        position: PositionFn,
    ) -> RingResult<Self>
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        Self::build(shards, vnodes_per_shard, position)
    }

    fn build<I, N, A>(shards: I, vnodes_per_shard: usize, position: PositionFn) -> RingResult<Self>
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        if vnodes_per_shard == 0 {
            return Err(RingError::Config(
                "virtual nodes per shard must be at least 1".to_string(),
            ));
        }

        let initial = sorted_shards(shards)?;

        let mut ring = Self {
            positions: BTreeMap::new(),
            shards: BTreeMap::new(),
            vnodes_per_shard,
            position,
        };

        for shard in initial {
            ring.insert_shard(shard);
        }

        debug!(
            shards = ring.shards.len(),
            vnodes = ring.positions.len(),
            "ring built"
        );

        Ok(ring)
    }

    pub fn with_default_vnodes<I, N, A>(shards: I) -> RingResult<Self>
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: AsRef<str>,
    {
        Self::new(shards, DEFAULT_VNODES_PER_SHARD)
    }

    #[inline]
    pub fn vnodes_per_shard(&self) -> usize {
        self.vnodes_per_shard
    }

    /// Number of virtual nodes currently on the ring.
    #[inline]
    pub fn vnode_count(&self) -> usize {
        self.positions.len()
    }

    /// Ring positions in ascending order with their owners.
    pub fn positions(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.positions.iter().map(|(pos, shard)| (*pos, shard.name()))
    }

    fn insert_shard(&mut self, shard: Shard) {
        let mut discarded = 0usize;

        for i in 0..self.vnodes_per_shard {
            let pos = (self.position)(shard.name(), i);

            match self.positions.get(&pos) {
                Some(owner) => {
                    trace!(
                        shard = shard.name(),
                        owner = owner.name(),
                        pos,
                        "vnode collision, discarding"
                    );
                    discarded += 1;
                }
                None => {
                    self.positions.insert(pos, shard.clone());
                }
            }
        }

        debug!(
            shard = shard.name(),
            inserted = self.vnodes_per_shard - discarded,
            discarded,
            "shard vnodes inserted"
        );

        self.shards.insert(Box::from(shard.name()), shard);
    }

    /// Positions that `name` actually owns right now.
    fn owned_positions(&self, name: &str) -> BTreeSet<u64> {
        (0..self.vnodes_per_shard)
            .map(|i| (self.position)(name, i))
            .filter(|pos| {
                self.positions
                    .get(pos)
                    .is_some_and(|owner| owner.name() == name)
            })
            .collect()
    }

    pub(crate) fn locate(&self, target: u64) -> Option<&Shard> {
        self.positions
            .range(target..)
            .next()
            .or_else(|| self.positions.first_key_value())
            .map(|(_, shard)| shard)
    }
}

impl Router for Ring {
    fn lookup_hash(&self, hash: u64) -> &Shard {
        match self.locate(hash) {
            Some(shard) => shard,
            None => unreachable!("remove_shard never drops the last virtual node"),
        }
    }

    fn add_shard(&mut self, name: &str, address: &str) -> RingResult<()> {
        if name.is_empty() {
            return Err(RingError::Config("shard name is empty".to_string()));
        }

        if self.shards.contains_key(name) {
            return Err(RingError::DuplicateShard(name.to_string()));
        }

        self.insert_shard(Shard::new(name, address));

        Ok(())
    }

    fn remove_shard(&mut self, name: &str) -> RingResult<Shard> {
        if !self.shards.contains_key(name) {
            return Err(RingError::NotFound(name.to_string()));
        }

        if self.shards.len() == 1 {
            return Err(RingError::Config(format!(
                "cannot remove {name}: it is the last shard"
            )));
        }

        let owned = self.owned_positions(name);

        if owned.len() == self.positions.len() {
            return Err(RingError::Config(format!(
                "cannot remove {name}: no other shard owns a virtual node"
            )));
        }

        for pos in &owned {
            self.positions.remove(pos);
        }

        debug!(shard = name, removed = owned.len(), "shard vnodes removed");

        self.shards
            .remove(name)
            .ok_or_else(|| RingError::NotFound(name.to_string()))
    }

    fn contains(&self, name: &str) -> bool {
        self.shards.contains_key(name)
    }

    fn shard(&self, name: &str) -> Option<&Shard> {
        self.shards.get(name)
    }

    fn shards(&self) -> Vec<&Shard> {
        self.shards.values().collect()
    }

    fn len(&self) -> usize {
        self.shards.len()
    }
}

/// Validates an initial shard set and returns it ordered by name.
pub(crate) fn sorted_shards<I, N, A>(shards: I) -> RingResult<Vec<Shard>>
where
    I: IntoIterator<Item = (N, A)>,
    N: AsRef<str>,
    A: AsRef<str>,
{
    let mut initial: Vec<Shard> = shards
        .into_iter()
        .map(|(name, address)| Shard::new(name.as_ref(), address.as_ref()))
        .collect();

    if initial.is_empty() {
        return Err(RingError::Config("shard set is empty".to_string()));
    }

    if initial.iter().any(|s| s.name().is_empty()) {
        return Err(RingError::Config("shard name is empty".to_string()));
    }

    initial.sort_by(|a, b| a.name().cmp(b.name()));

    if let Some(dup) = initial.windows(2).find(|w| w[0].name() == w[1].name()) {
        return Err(RingError::DuplicateShard(dup[0].name().to_string()));
    }

    Ok(initial)
}
