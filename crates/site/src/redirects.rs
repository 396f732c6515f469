use crate::SiteConfigError;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One legacy path and where it now lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

impl Redirect {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Redirects in declaration order.
///
/// `/about` and `/about/` are unrelated keys: a request resolves only when
/// its path was declared verbatim. No trailing-slash normalization happens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedirectTable {
    entries: Vec<Redirect>,
}

impl RedirectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair, rejecting relative paths and repeated sources.
    pub fn insert(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<(), SiteConfigError> {
        let redirect = Redirect::new(from, to);
        for path in [&redirect.from, &redirect.to] {
            if !path.starts_with('/') {
                return Err(SiteConfigError::InvalidPath(path.clone()));
            }
        }
        if self.resolve(&redirect.from).is_some() {
            return Err(SiteConfigError::DuplicateRedirect(redirect.from));
        }
        self.entries.push(redirect);
        Ok(())
    }

    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.from == path)
            .map(|r| r.to.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Redirect> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RedirectTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for r in &self.entries {
            map.serialize_entry(&r.from, &r.to)?;
        }
        map.end()
    }
}

/// Reads a JSON object, keeping key order.
impl<'de> Deserialize<'de> for RedirectTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = RedirectTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of source path to destination path")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = RedirectTable::new();
                while let Some((from, to)) = access.next_entry::<String, String>()? {
                    table
                        .insert(from, to)
                        .map_err(<A::Error as de::Error>::custom)?;
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
