use std::fmt;

/// A free-text address as supplied by the caller.
///
/// No normalization is applied: casing and whitespace are kept and
/// the empty string is a legal (if useless) query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressQuery(String);

impl AddressQuery {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
    pub fn into_string(self) -> String {
        self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for AddressQuery {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for AddressQuery {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl AsRef<str> for AddressQuery {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
