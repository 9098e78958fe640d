use crate::pattern::CompiledPattern;
use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Bounded cache of compiled patterns, keyed by route pattern source. A
/// dispatcher compiles under a single fixed policy, so the source string is a
/// sufficient key. Eviction is oldest-first.
#[derive(Debug)]
pub struct PatternCache {
    inner: RwLock<CacheState>,
}

#[derive(Debug)]
struct CacheState {
    capacity: usize,
    map: FastHashMap<String, Arc<CompiledPattern>>,
    order: VecDeque<String>,
}

impl PatternCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: RwLock::new(CacheState {
                capacity,
                map: FastHashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
        }
    }

    pub fn fetch(&self, pattern: &str) -> Option<Arc<CompiledPattern>> {
        let state = self.inner.read();
        state.map.get(pattern).cloned()
    }

    pub fn store(&self, pattern: &str, compiled: Arc<CompiledPattern>) {
        let mut state = self.inner.write();

        if state.map.contains_key(pattern) {
            state.map.insert(pattern.to_string(), compiled);
            return;
        }

        if state.order.len() == state.capacity
            && let Some(oldest) = state.order.pop_front()
        {
            state.map.remove(&oldest);
        }

        state.order.push_back(pattern.to_string());
        state.map.insert(pattern.to_string(), compiled);
    }

    pub fn len(&self) -> usize {
        self.inner.read().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().map.is_empty()
    }
}
