use std::{env, fmt, str::FromStr};

use shard_ring::DEFAULT_VNODES_PER_SHARD;

use crate::core::domain::models::AppError;

pub const SHARDS_VAR: &str = "RING_SHARDS";
pub const VNODES_VAR: &str = "RING_VNODES";
pub const STRATEGY_VAR: &str = "RING_STRATEGY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingStrategy {
    #[default]
    Ring,
    Rendezvous,
}

impl FromStr for RoutingStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ring" | "consistent" => Ok(RoutingStrategy::Ring),
            "rendezvous" | "hrw" => Ok(RoutingStrategy::Rendezvous),
            other => Err(AppError::Config(format!(
                "{STRATEGY_VAR} must be `ring` or `rendezvous`, got `{other}`"
            ))),
        }
    }
}

impl fmt::Display for RoutingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingStrategy::Ring => f.write_str("ring"),
            RoutingStrategy::Rendezvous => f.write_str("rendezvous"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// `(name, address)` pairs in declaration order.
    pub shards: Vec<(String, String)>,
    pub vnodes_per_shard: usize,
    pub strategy: RoutingStrategy,
}

impl RouterConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(SHARDS_VAR) {
            cfg.shards = parse_shards(&raw)?;
        }

        if let Some(raw) = lookup(VNODES_VAR) {
            cfg.vnodes_per_shard = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "{VNODES_VAR} must be a positive integer, got `{raw}`"
                    ))
                })?;
        }

        if let Some(raw) = lookup(STRATEGY_VAR) {
            cfg.strategy = raw.parse()?;
        }

        Ok(cfg)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            shards: vec![
                ("shard1".to_string(), "localhost:7000".to_string()),
                ("shard2".to_string(), "localhost:7001".to_string()),
                ("shard3".to_string(), "localhost:7002".to_string()),
            ],
            vnodes_per_shard: DEFAULT_VNODES_PER_SHARD,
            strategy: RoutingStrategy::Ring,
        }
    }
}

/// Parses `name=address` entries separated by `;` or `,`.
///
/// A bare address is named after its 1-based position (`shard1`, `shard2`,
/// ...). URLs such as `redis://host:6379/0?family=6` stay bare addresses.
pub fn parse_shards(raw: &str) -> Result<Vec<(String, String)>, AppError> {
    let shards: Vec<(String, String)> = raw
        .split([';', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, entry)| match named_entry(entry) {
            Some((name, address)) => (name.to_string(), address.to_string()),
            None => (format!("shard{}", i + 1), entry.to_string()),
        })
        .collect();

    if shards.is_empty() {
        return Err(AppError::Config(format!("{SHARDS_VAR} is empty")));
    }

    if let Some((name, _)) = shards.iter().find(|(n, a)| n.is_empty() || a.is_empty()) {
        return Err(AppError::Config(format!(
            "{SHARDS_VAR} has an entry with an empty name or address (name `{name}`)"
        )));
    }

    Ok(shards)
}

/// Splits `name=address` when the part before the first `=` is a plain name.
fn named_entry(entry: &str) -> Option<(&str, &str)> {
    let (name, address) = entry.split_once('=')?;
    if name.contains([':', '/']) {
        return None;
    }
    Some((name.trim(), address.trim()))
}
