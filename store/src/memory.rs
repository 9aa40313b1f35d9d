use std::sync::Arc;

use dashmap::DashMap;

use crate::{CookieMap, CookieStore, RemoveOptions, SetOptions, StoreResult};

/// In-memory cookie store, mainly for tests and demos.
///
/// Keeps the options each write arrived with so callers can inspect what a
/// component actually asked for. Enumeration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cookies: Arc<DashMap<String, StoredCookie>>,
}

#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    options: SetOptions,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The options the last write for `name` carried.
    pub fn options(&self, name: &str) -> Option<SetOptions> {
        self.cookies.get(name).map(|entry| entry.options.clone())
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieStore for MemoryStore {
    fn all(&self) -> StoreResult<CookieMap> {
        let map = self
            .cookies
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().value.clone()))
            .collect();
        Ok(map)
    }

    fn set(&self, name: &str, value: &str, options: &SetOptions) -> StoreResult<()> {
        let cookie = StoredCookie {
            value: value.to_owned(),
            options: options.clone(),
        };
        self.cookies.insert(name.to_owned(), cookie);
        Ok(())
    }

    fn remove(&self, name: &str, _options: &RemoveOptions) -> StoreResult<()> {
        self.cookies.remove(name);
        Ok(())
    }
}
