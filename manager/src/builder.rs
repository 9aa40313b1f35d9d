use crumb_store::{CookieMap, CookieStore, StoreResult};

use crate::{form::FormState, policy::AttributePolicy, CookieManager};

#[derive(Debug)]
pub struct CookieManagerBuilder<S> {
    store: S,
    policy: AttributePolicy,
}

impl<S: CookieStore> CookieManagerBuilder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: AttributePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AttributePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Assembles the manager and performs the initial snapshot read.
    pub fn mount(self) -> StoreResult<CookieManager<S>> {
        let mut manager = CookieManager {
            store: self.store,
            policy: self.policy,
            form: FormState::default(),
            snapshot: CookieMap::new(),
        };
        manager.refresh()?;
        Ok(manager)
    }
}
