use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use cookie::time::Duration;
use cookie::Cookie;

use crate::{CookieMap, CookieStore, RemoveOptions, SetOptions, StoreResult};

/// Cookie store backed by a [`cookie::CookieJar`].
///
/// All cookie semantics live in the `cookie` crate; this type only applies
/// the platform rules a browser would: a `Secure` cookie written from a
/// non-secure context never persists, and removing a cookie that was set
/// with an explicit domain or path requires the same attributes. Both
/// failures are silent, exactly as they are in a real document context.
#[derive(Debug, Clone)]
pub struct JarStore {
    jar: Arc<RwLock<cookie::CookieJar>>,
    secure_context: bool,
}

impl JarStore {
    /// A store for a secure (https) context.
    pub fn new() -> Self {
        Self {
            jar: Arc::new(RwLock::new(cookie::CookieJar::new())),
            secure_context: true,
        }
    }

    /// A store for a non-secure context, where `Secure` writes are dropped.
    pub fn insecure() -> Self {
        Self {
            secure_context: false,
            ..Self::new()
        }
    }

    /// The full cookie held under `name`, attributes included.
    pub fn cookie(&self, name: &str) -> Option<Cookie<'static>> {
        self.jar.read().ok()?.get(name).cloned()
    }
}

impl Default for JarStore {
    fn default() -> Self {
        Self::new()
    }
}

// The `cookie` crate trims the leading dot on read, so normalize both
// sides before comparing removal attributes.
fn domain_matches(stored: Option<&str>, requested: Option<&str>) -> bool {
    stored.map(|d| d.trim_start_matches('.')) == requested.map(|d| d.trim_start_matches('.'))
}

impl CookieStore for JarStore {
    fn all(&self) -> StoreResult<CookieMap> {
        let jar = self
            .jar
            .read()
            .map_err(|_| anyhow!("cookie jar lock poisoned"))?;
        let map = jar
            .iter()
            .map(|cookie| (cookie.name(), cookie.value()))
            .collect();
        Ok(map)
    }

    fn set(&self, name: &str, value: &str, options: &SetOptions) -> StoreResult<()> {
        if options.secure && !self.secure_context {
            #[cfg(feature = "tracing")]
            tracing::debug!("dropping Secure cookie {name} written from a non-secure context");
            return Ok(());
        }

        let mut builder =
            Cookie::build((name.to_owned(), value.to_owned())).secure(options.secure);
        if let Some(days) = options.expires {
            builder = builder.max_age(Duration::days(days));
        }
        if let Some(same_site) = options.same_site {
            builder = builder.same_site(same_site);
        }
        if let Some(domain) = &options.domain {
            builder = builder.domain(domain.clone());
        }

        let mut jar = self
            .jar
            .write()
            .map_err(|_| anyhow!("cookie jar lock poisoned"))?;
        jar.add(builder.build());
        Ok(())
    }

    fn remove(&self, name: &str, options: &RemoveOptions) -> StoreResult<()> {
        let mut jar = self
            .jar
            .write()
            .map_err(|_| anyhow!("cookie jar lock poisoned"))?;

        let Some(existing) = jar.get(name) else {
            return Ok(());
        };
        let matches = domain_matches(existing.domain(), options.domain.as_deref())
            && existing.path() == options.path.as_deref();
        if !matches {
            #[cfg(feature = "tracing")]
            tracing::debug!("removal attributes for {name} do not match, leaving cookie in place");
            return Ok(());
        }

        jar.remove(name.to_owned());
        Ok(())
    }
}
