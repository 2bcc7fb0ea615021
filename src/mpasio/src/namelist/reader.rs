// mpasio/src/namelist/reader.rs

//! Namelist reader with typed accessors.

use super::map::NamelistMap;
use super::scanner;
use crate::error::{MpasIoError, Result};
use log::debug;
use std::ops::Index;
use std::path::{Path, PathBuf};

/// Read a namelist file into a flat key/value mapping.
///
/// Every line of the form `key = value` contributes one entry; a key that is
/// assigned more than once keeps its last value. With `readonly` set, the
/// returned mapping rejects all mutation.
pub fn convert_namelist_to_map<P: AsRef<Path>>(path: P, readonly: bool) -> Result<NamelistMap> {
    let path = path.as_ref();
    let content = fs_err::read_to_string(path)?;
    let map = parse_entries(&content).with_readonly(readonly);
    debug!(
        "Read {} namelist entries from {}",
        map.len(),
        path.display()
    );
    Ok(map)
}

fn parse_entries(content: &str) -> NamelistMap {
    scanner::scan(content)
        .map(|assignment| (assignment.key, assignment.value))
        .collect()
}

/// A namelist file parsed into a read-only mapping.
///
/// Values are stored as raw strings; the typed accessors re-parse them on
/// every call.
///
/// ```
/// let nml = mpasio::NameList::parse("&run\n  config_dt = 1800.0\n/\n");
/// assert_eq!(nml.get_float("config_dt").unwrap(), 1800.0);
/// ```
#[derive(Debug, Clone)]
pub struct NameList {
    path: Option<PathBuf>,
    nml: NamelistMap,
}

impl NameList {
    /// Read and parse a namelist file.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let nml = convert_namelist_to_map(path, true)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            nml,
        })
    }

    /// Parse namelist text that did not come from a file.
    pub fn parse(content: &str) -> Self {
        Self {
            path: None,
            nml: parse_entries(content).with_readonly(true),
        }
    }

    /// The file this namelist was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The underlying read-only mapping.
    pub fn as_map(&self) -> &NamelistMap {
        &self.nml
    }

    /// Raw string value for `key`.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.nml
            .get(key)
            .ok_or_else(|| MpasIoError::key_not_found(key))
    }

    pub fn get_int(&self, key: &str) -> Result<i64> {
        let value = self.get(key)?;
        value.parse().map_err(|source| MpasIoError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
    }

    pub fn get_float(&self, key: &str) -> Result<f64> {
        let value = self.get(key)?;
        value.parse().map_err(|source| MpasIoError::InvalidFloat {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
    }

    /// True when the stored text contains `true` in any letter case.
    ///
    /// Anything else, including malformed text such as `maybe`, is false.
    /// Only a missing key is an error.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        let value = self.get(key)?;
        Ok(value.to_ascii_lowercase().contains("true"))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.nml.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nml.keys()
    }

    pub fn len(&self) -> usize {
        self.nml.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nml.is_empty()
    }
}

impl Index<&str> for NameList {
    type Output = str;

    /// Bracket access, `nml["config_dt"]`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present. Use [`NameList::get`] to handle a
    /// missing key.
    fn index(&self, key: &str) -> &str {
        match self.nml.get(key) {
            Some(value) => value,
            None => panic!("{}", MpasIoError::key_not_found(key)),
        }
    }
}
