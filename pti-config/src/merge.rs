//! Right-biased merging of option sets.
//!
//! Each config kind implements [`Merge`] with an explicit field list, so the
//! set of keys that participate in a merge is fixed at compile time. Keys a
//! typed model does not know live in an `extra` map and are merged per key.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Trait for merging option sets.
///
/// Fields set in `overrides` replace the base value; unset fields fall back
/// to the base value.
pub trait Merge {
    fn merge(self, overrides: Self) -> Self;
}

/// Merge two untyped option bags. Existing keys keep their position.
pub fn merge_extra(
    base: IndexMap<String, Value>,
    overrides: IndexMap<String, Value>,
) -> IndexMap<String, Value> {
    let mut merged = base;
    merged.extend(overrides);
    merged
}

/// An override for a key that can also be removed.
///
/// Deserializes from a missing field as `Inherit`, from `null` as `Clear`
/// and from any other value as `Set`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    /// Keep the base value
    #[default]
    Inherit,
    /// Replace the base value
    Set(T),
    /// Remove the key
    Clear,
}

impl<T> Patch<T> {
    pub fn apply(self, base: Option<T>) -> Option<T> {
        match self {
            Patch::Inherit => base,
            Patch::Set(value) => Some(value),
            Patch::Clear => None,
        }
    }
}

impl<T> Merge for Patch<T> {
    fn merge(self, overrides: Self) -> Self {
        match overrides {
            Patch::Inherit => self,
            other => other,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}
