use crate::constants::SHOW_HEADER_LINKS;
use bitflags::bitflags;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Named boolean switches resolved at render time.
    ///
    /// A flag that is not set behaves as `false`, so an empty set hides every
    /// optional part of the page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureFlags: u32 {
        const SHOW_HEADER_LINKS = 1 << 0;

        const ALL = Self::SHOW_HEADER_LINKS.bits();
    }
}

/// Every known flag paired with its config key, in rendering order.
const KNOWN: &[(&str, FeatureFlags)] = &[(SHOW_HEADER_LINKS, FeatureFlags::SHOW_HEADER_LINKS)];

impl FeatureFlags {
    /// Builds a flag set from `name -> enabled` pairs. Unknown names are ignored.
    pub fn from_map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        entries
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .fold(Self::empty(), |acc, (name, _)| acc | Self::from(name.as_ref()))
    }

    /// Returns `true` when the flag called `name` is switched on.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        let flag = Self::from(name);
        !flag.is_empty() && self.contains(flag)
    }

    /// Config keys of the enabled flags.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        KNOWN.iter().filter(move |(_, flag)| self.contains(*flag)).map(|(name, _)| *name)
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for FeatureFlags {
    fn from(s: &str) -> Self {
        match s {
            "all" | "*" => Self::ALL,
            _ => KNOWN
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(s))
                .map_or_else(Self::empty, |(_, flag)| *flag),
        }
    }
}

impl Serialize for FeatureFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(KNOWN.len()))?;
        for (name, flag) in KNOWN {
            map.serialize_entry(name, &self.contains(*flag))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagTable;

        impl<'de> Visitor<'de> for FlagTable {
            type Value = FeatureFlags;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of feature flag names to booleans")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut flags = FeatureFlags::empty();
                while let Some((name, enabled)) = access.next_entry::<String, bool>()? {
                    if enabled {
                        flags |= FeatureFlags::from(name.as_str());
                    }
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_map(FlagTable)
    }
}
