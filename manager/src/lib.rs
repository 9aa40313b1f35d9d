mod builder;
mod form;
mod policy;
mod render;

pub use builder::CookieManagerBuilder;
pub use form::{FormField, FormState};
pub use policy::AttributePolicy;

use crumb_store::{CookieMap, CookieStore, RemoveOptions, StoreResult};

/// The cookie manager component: a form for writing cookies and a list of
/// everything currently in the store.
///
/// The component never trusts its own view. The snapshot is a cache of the
/// store's last enumeration, replaced wholesale by [`refresh`] after every
/// mutation; nothing is patched incrementally. All handlers run to
/// completion synchronously, so there is no pending or error state to
/// model — the component is always "ready".
///
/// [`refresh`]: CookieManager::refresh
#[derive(Debug)]
pub struct CookieManager<S> {
    store: S,
    policy: AttributePolicy,
    form: FormState,
    snapshot: CookieMap,
}

impl<S: CookieStore> CookieManager<S> {
    pub fn builder(store: S) -> CookieManagerBuilder<S> {
        CookieManagerBuilder::new(store)
    }

    /// Mounts the component over `store` with the default attribute
    /// policy, reading the initial snapshot.
    pub fn mount(store: S) -> StoreResult<Self> {
        Self::builder(store).mount()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn snapshot(&self) -> &CookieMap {
        &self.snapshot
    }

    pub fn policy(&self) -> &AttributePolicy {
        &self.policy
    }

    /// Updates one form field. No validation happens at edit time.
    pub fn on_field_change<V: Into<String>>(&mut self, field: FormField, value: V) {
        self.form.set(field, value.into());
    }

    /// Submits the form.
    ///
    /// An empty name or value makes this a silent no-op. Otherwise the
    /// cookie is written with the policy's fixed attributes (plus the
    /// trimmed domain when one was entered), the snapshot is refreshed,
    /// and the form is cleared.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn on_submit(&mut self) -> StoreResult<()> {
        if !self.form.is_submittable() {
            #[cfg(feature = "tracing")]
            tracing::debug!("ignoring submission with empty name or value");
            return Ok(());
        }

        let options = self.policy.options_for(self.form.domain());
        self.store.set(self.form.name(), self.form.value(), &options)?;
        self.refresh()?;
        self.form.clear();
        Ok(())
    }

    /// Removes the named cookie and refreshes. No confirmation, no undo;
    /// whether the store actually dropped it shows up in the new snapshot.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn on_remove(&mut self, name: &str) -> StoreResult<()> {
        self.store.remove(name, &RemoveOptions::new())?;
        self.refresh()
    }

    /// Replaces the snapshot with the store's current enumeration. The
    /// single choke point between the component and the store.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn refresh(&mut self) -> StoreResult<()> {
        self.snapshot = self.store.all()?;
        #[cfg(feature = "tracing")]
        tracing::debug!("snapshot refreshed, {} cookies visible", self.snapshot.len());
        Ok(())
    }

    /// Renders the whole component: form first, then the cookie list.
    pub fn render(&self) -> String {
        let mut out = render::render_form(&self.form);
        out.push_str(&render::render_list(&self.snapshot));
        out
    }
}

#[cfg(test)]
mod tests {
    use crumb_store::{MemoryStore, SetOptions};

    use super::*;

    fn mounted() -> (MemoryStore, CookieManager<MemoryStore>) {
        let store = MemoryStore::new();
        let manager = CookieManager::mount(store.clone()).unwrap();
        (store, manager)
    }

    fn fill(manager: &mut CookieManager<MemoryStore>, name: &str, value: &str, domain: &str) {
        manager.on_field_change(FormField::Name, name);
        manager.on_field_change(FormField::Value, value);
        manager.on_field_change(FormField::Domain, domain);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let (store, mut manager) = mounted();
        store.set("theme", "light", &SetOptions::new()).unwrap();

        manager.refresh().unwrap();
        let first = manager.snapshot().clone();
        manager.refresh().unwrap();
        assert_eq!(manager.snapshot(), &first);
    }

    #[test]
    fn test_submit_reflects_in_snapshot() {
        let (_, mut manager) = mounted();
        fill(&mut manager, "a", "b", "");
        manager.on_submit().unwrap();
        assert_eq!(manager.snapshot().get("a"), Some("b"));
    }

    #[test]
    fn test_remove_excludes_name() {
        let (_, mut manager) = mounted();
        fill(&mut manager, "a", "b", "");
        manager.on_submit().unwrap();

        manager.on_remove("a").unwrap();
        assert!(!manager.snapshot().has("a"));
    }

    #[test]
    fn test_empty_name_is_a_noop() {
        let (store, mut manager) = mounted();
        fill(&mut manager, "", "x", "");
        manager.on_submit().unwrap();

        assert!(store.is_empty());
        assert!(manager.snapshot().is_empty());
        // The form keeps its values; only successful submissions clear it.
        assert_eq!(manager.form().value(), "x");
    }

    #[test]
    fn test_empty_value_is_a_noop() {
        let (store, mut manager) = mounted();
        fill(&mut manager, "x", "", "");
        manager.on_submit().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_form_resets_after_submit() {
        let (_, mut manager) = mounted();
        fill(&mut manager, "a", "b", ".example.com");
        manager.on_submit().unwrap();

        assert_eq!(manager.form().name(), "");
        assert_eq!(manager.form().value(), "");
        assert_eq!(manager.form().domain(), "");
    }

    #[test]
    fn test_domain_attribute_is_conditional() {
        let (store, mut manager) = mounted();
        fill(&mut manager, "a", "b", "");
        manager.on_submit().unwrap();
        assert_eq!(store.options("a").unwrap().domain, None);

        fill(&mut manager, "c", "d", ".example.com");
        manager.on_submit().unwrap();
        assert_eq!(
            store.options("c").unwrap().domain.as_deref(),
            Some(".example.com")
        );
    }

    #[test]
    fn test_submit_uses_policy_defaults() {
        let (store, mut manager) = mounted();
        fill(&mut manager, "a", "b", "");
        manager.on_submit().unwrap();

        let options = store.options("a").unwrap();
        assert_eq!(options.expires, Some(7));
        assert!(options.secure);
        assert_eq!(options.same_site, Some(crumb_store::SameSite::Strict));
    }

    #[test]
    fn test_external_writes_appear_after_refresh() {
        let (store, mut manager) = mounted();
        store.set("outside", "1", &SetOptions::new()).unwrap();
        assert!(!manager.snapshot().has("outside"));

        manager.refresh().unwrap();
        assert_eq!(manager.snapshot().get("outside"), Some("1"));
    }

    #[test]
    fn test_render_empty_state() {
        let (_, manager) = mounted();
        let rendered = manager.render();
        assert!(rendered.contains("No cookies found"));
        assert!(rendered.contains("Set Cookie"));
    }
}
