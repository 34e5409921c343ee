use std::time::Duration;

use anyhow::Result;
use common::{Config, ConfigLoader};

const DEFAULT_MAX_DEPTH: usize = 2;
const DEFAULT_CACHE_CAPACITY: usize = 1 << 16;

#[derive(Clone, Debug)]
pub struct NegamaxOptions {
    pub(crate) max_depth: usize,
    pub(crate) cache_capacity: usize,
    pub(crate) max_nodes: Option<usize>,
    pub(crate) time_budget: Option<Duration>,
}

impl NegamaxOptions {
    pub fn new(
        max_depth: usize,
        cache_capacity: usize,
        max_nodes: Option<usize>,
        time_budget: Option<Duration>,
    ) -> Self {
        NegamaxOptions {
            max_depth,
            cache_capacity,
            max_nodes,
            time_budget,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for NegamaxOptions {
    fn default() -> Self {
        NegamaxOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_nodes: None,
            time_budget: None,
        }
    }
}

impl Config for NegamaxOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let max_depth = config
            .get("max_depth")
            .and_then(|v| v.as_usize())
            .unwrap_or(DEFAULT_MAX_DEPTH);

        let cache_capacity = config
            .get("cache_capacity")
            .and_then(|v| v.as_usize())
            .unwrap_or(DEFAULT_CACHE_CAPACITY);

        let max_nodes = config
            .get("max_nodes")
            .and_then(|v| v.as_usize())
            .filter(|&nodes| nodes > 0);

        let time_budget = config
            .get("time_budget_ms")
            .and_then(|v| v.as_u64())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis);

        Ok(NegamaxOptions {
            max_depth,
            cache_capacity,
            max_nodes,
            time_budget,
        })
    }
}
