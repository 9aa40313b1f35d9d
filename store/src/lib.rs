mod attributes;
mod jar;
mod map;
#[cfg(feature = "memory")]
mod memory;

pub use attributes::{RemoveOptions, SetOptions};
pub use cookie::SameSite;
pub use jar::JarStore;
pub use map::CookieMap;
#[cfg(feature = "memory")]
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Access to the cookie store visible from the current context.
///
/// The store is the single source of truth: callers cache the result of
/// [`all`](CookieStore::all) and re-read it after every mutation instead of
/// patching their own copy. A write the platform refuses (for example a
/// `Secure` cookie on a non-secure context) is not an error; it simply does
/// not show up on the next read.
pub trait CookieStore {
    /// Returns every cookie visible to the caller, in the store's own
    /// enumeration order. Callers must treat that order as unspecified.
    fn all(&self) -> StoreResult<CookieMap>;

    /// Writes a cookie. An existing cookie with the same name is replaced.
    fn set(&self, name: &str, value: &str, options: &SetOptions) -> StoreResult<()>;

    /// Deletes the named cookie. Attribute mismatches (domain, path) may
    /// leave the cookie in place without reporting anything.
    fn remove(&self, name: &str, options: &RemoveOptions) -> StoreResult<()>;
}
