use std::fmt;

/// Unique identifier for one upload, used as the object path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UploadKey(String);

impl UploadKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn object_path(&self, prefix: &str, extension: &str) -> String {
        let prefix = prefix.trim_matches('/');
        format!("{}/{}.{}", prefix, self.0, extension)
    }
}

impl fmt::Display for UploadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
