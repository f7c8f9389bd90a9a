use anyhow::Result;
use std::fmt;

/// Resolvable address of an uploaded object. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageLocator(String);

impl ImageLocator {
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            anyhow::bail!("Object store returned an empty locator");
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_url() {
        let locator = ImageLocator::parse("https://example.com/a.jpg").unwrap();

        assert_eq!(locator.as_str(), "https://example.com/a.jpg");
    }

    #[test]
    fn test_parse_rejects_blank_value() {
        assert!(ImageLocator::parse("").is_err());
        assert!(ImageLocator::parse("   ").is_err());
    }
}
