//! Search query normalization.

/// A normalized, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim and lowercase raw input. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(SearchQuery::parse("  RiCe ").unwrap().as_str(), "rice");
        assert_eq!(SearchQuery::parse("চাল").unwrap().as_str(), "চাল");
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse("   \t").is_none());
    }
}
