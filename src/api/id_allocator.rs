use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one drawn element, unique within its chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-chart element id source.
///
/// Ids are `{prefix}-{n}` with `n` counting up from 1 and never reused, so
/// two charts with different prefixes cannot collide.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn allocate(&mut self) -> ElementId {
        let id = ElementId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }

    #[must_use]
    pub fn allocated_count(&self) -> u64 {
        self.next - 1
    }
}
