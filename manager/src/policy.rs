use crumb_store::{SameSite, SetOptions};

/// The fixed attributes applied to every submitted cookie.
///
/// Defaults match the original behavior of the component: cookies expire
/// seven days from now, carry the `Secure` flag, and use a strict
/// same-site policy. These are deliberate configuration values; the form
/// never exposes them.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributePolicy {
    pub expires_days: i64,
    pub secure: bool,
    pub same_site: SameSite,
}

impl AttributePolicy {
    /// Builds the options record for one submission. The domain attribute
    /// is only present when the trimmed domain field is non-empty.
    pub fn options_for(&self, domain: &str) -> SetOptions {
        let mut options = SetOptions::new()
            .with_expires(self.expires_days)
            .with_secure(self.secure)
            .with_same_site(self.same_site);
        let domain = domain.trim();
        if !domain.is_empty() {
            options = options.with_domain(domain);
        }
        options
    }
}

impl Default for AttributePolicy {
    fn default() -> Self {
        Self {
            expires_days: 7,
            secure: true,
            same_site: SameSite::Strict,
        }
    }
}
