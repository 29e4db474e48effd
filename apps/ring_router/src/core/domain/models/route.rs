/// Where a key was routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedKey {
    pub key: String,
    pub hash: u64,
    pub shard: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSummary {
    pub name: String,
    pub address: String,
    /// Keys routed to this shard since it was registered.
    pub routed_keys: u64,
}
