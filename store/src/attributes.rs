use cookie::SameSite;

/// Attributes attached to a cookie write.
///
/// `expires` counts in days from now. A `None` expiry means a session
/// cookie; `domain` widens visibility to subdomains when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetOptions {
    pub expires: Option<i64>,
    pub secure: bool,
    pub same_site: Option<SameSite>,
    pub domain: Option<String>,
}

impl SetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expires(mut self, days: i64) -> Self {
        self.expires = Some(days);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    pub fn with_domain<D: Into<String>>(mut self, domain: D) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Attributes attached to a cookie removal.
///
/// A cookie written with an explicit domain or path can only be removed
/// with the same attributes; the platform drops mismatched removals
/// without telling anyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    pub domain: Option<String>,
    pub path: Option<String>,
}

impl RemoveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain<D: Into<String>>(mut self, domain: D) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_path<P: Into<String>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }
}
