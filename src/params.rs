//! Interpolation parameters for route path templates.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single parameter value.
///
/// The set of shapes is deliberately closed to values with a canonical,
/// stable string form: the string form feeds both URL interpolation and the
/// rate-limit bucket key, so it must never vary between accesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Arbitrary text, stored verbatim.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned identifier such as a snowflake.
    Id(u64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Id(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        ParamValue::Id(n)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(n as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Int(n as i64)
    }
}

/// The ordered parameter mapping of a route.
///
/// Keys iterate in ascending lexicographic order regardless of the order
/// they were supplied in. That order is fixed at construction and is what
/// makes bucket derivation deterministic across call sites. The mapping is
/// read-only once built; there is no public mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Look up a value by exact placeholder name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Values in sorted-by-key order.
    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.0.values()
    }

    /// Key/value pairs in sorted-by-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    /// Builds the mapping from supplied pairs. Duplicate keys keep the last
    /// value, matching keyword-argument semantics at the call site.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
