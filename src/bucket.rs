use serde::Serialize;
use std::fmt;

/// An opaque rate-limit bucket key.
///
/// Routes that hit the same quota partition of the remote API derive equal
/// keys, so a throttling layer can use the key directly as a map entry to
/// serialize or pace those requests. Consumers compare and hash the key;
/// its internal structure is not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Bucket(String);

impl Bucket {
    pub(crate) fn new(key: String) -> Self {
        Bucket(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Bucket {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
