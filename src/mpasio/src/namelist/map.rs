// mpasio/src/namelist/map.rs

//! Flat namelist mapping with an optional read-only guard.

use crate::error::{MpasIoError, Result};
use linked_hash_map::LinkedHashMap;
use serde::Serialize;

/// Mapping from namelist key to raw string value, in file order.
///
/// When read-only, every mutating call fails with [`MpasIoError::ReadOnly`]
/// and the stored entries never change after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NamelistMap {
    entries: LinkedHashMap<String, String>,
    #[serde(skip)]
    readonly: bool,
}

impl NamelistMap {
    /// Create a new empty, writable mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read-only flag.
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Get the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<Option<String>>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        if self.readonly {
            return Err(MpasIoError::read_only(key));
        }
        Ok(self.entries.insert(key, value.into()))
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Result<Option<String>> {
        if self.readonly {
            return Err(MpasIoError::read_only(key));
        }
        Ok(self.entries.remove(key))
    }

    /// Copy the entries into a new writable mapping.
    pub fn to_writable(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            readonly: false,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for NamelistMap
where
    K: Into<String>,
    V: Into<String>,
{
    /// Collect into a writable mapping. Later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = LinkedHashMap::new();
        for (key, value) in iter {
            entries.insert(key.into(), value.into());
        }
        Self {
            entries,
            readonly: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writable_map_accepts_writes() {
        let mut map = NamelistMap::new();
        assert_eq!(map.insert("config_dt", "1800.0").unwrap(), None);
        assert_eq!(
            map.insert("config_dt", "900.0").unwrap(),
            Some("1800.0".to_string())
        );
        assert_eq!(map.get("config_dt"), Some("900.0"));

        assert_eq!(map.remove("config_dt").unwrap(), Some("900.0".to_string()));
        assert!(map.is_empty());
    }

    #[test]
    fn test_readonly_map_rejects_writes() {
        let mut map: NamelistMap = [("config_dt", "1800.0")].into_iter().collect();
        map = map.with_readonly(true);

        let err = map.insert("config_dt", "900.0").unwrap_err();
        assert!(matches!(err, MpasIoError::ReadOnly { ref key } if key == "config_dt"));

        let err = map.insert("new_key", "1").unwrap_err();
        assert!(matches!(err, MpasIoError::ReadOnly { .. }));

        assert!(matches!(
            map.remove("config_dt"),
            Err(MpasIoError::ReadOnly { .. })
        ));

        assert_eq!(map.get("config_dt"), Some("1800.0"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_to_writable_copies_entries() {
        let frozen: NamelistMap = [("a", "1")].into_iter().collect();
        let frozen = frozen.with_readonly(true);

        let mut copy = frozen.to_writable();
        copy.insert("b", "2").unwrap();

        assert!(!copy.is_readonly());
        assert_eq!(copy.len(), 2);
        assert_eq!(frozen.len(), 1);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let map: NamelistMap = [("z", "1"), ("a", "2"), ("m", "3")].into_iter().collect();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
