use std::{fmt, sync::Arc};

/// A named backend partition. The address is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    name: Arc<str>,
    address: Arc<str>,
}

impl Shard {
    #[inline]
    pub fn new(name: impl Into<Arc<str>>, address: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.address)
    }
}
