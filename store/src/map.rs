/// A name → value mapping of cookies, in enumeration order.
///
/// Order is whatever the producing store yielded; inserting an existing
/// name overwrites its value in place, a new name goes to the end. Names
/// are unique (the underlying store enforces this).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieMap {
    entries: Vec<(String, String)>,
}

impl CookieMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for CookieMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = CookieMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut map = CookieMap::new();
        map.insert("theme", "light");
        assert_eq!(map.get("theme"), Some("light"));
        assert!(map.has("theme"));
        assert!(!map.has("session"));
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut map = CookieMap::new();
        map.insert("b", "2").insert("a", "1").insert("c", "3");
        let names: Vec<_> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = CookieMap::new();
        map.insert("b", "2").insert("a", "1");
        map.insert("b", "22");
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, [("b", "22"), ("a", "1")]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_empty() {
        let map = CookieMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get("missing"), None);
    }
}
