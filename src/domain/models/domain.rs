//! Knowledge domain selector.

use serde::{Deserialize, Serialize};

/// Subject-matter partition selecting which index/answer pair is consulted.
///
/// Exactly two domains are supported. There is no cross-domain fallback:
/// a query routed to one domain is answered (or not) entirely from that
/// domain's artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Health and medicine questions.
    Medical,
    /// Farming and crop questions.
    Agricultural,
}

impl Domain {
    /// All supported domains, in a stable order.
    pub const ALL: [Self; 2] = [Self::Medical, Self::Agricultural];

    /// Stable lowercase identifier used in config files and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medical => "medical",
            Self::Agricultural => "agricultural",
        }
    }

    /// Whether accepted answers from this domain carry the fixed
    /// medical disclaimer suffix.
    pub fn requires_disclaimer(&self) -> bool {
        matches!(self, Self::Medical)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "medical" | "medicine" | "med" => Ok(Self::Medical),
            "agricultural" | "agriculture" | "agri" => Ok(Self::Agricultural),
            other => Err(format!(
                "Unknown domain: {other}. Must be one of: medical, agricultural"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Domain::from_str("medical").unwrap(), Domain::Medical);
        assert_eq!(Domain::from_str("Medicine").unwrap(), Domain::Medical);
        assert_eq!(Domain::from_str("agri").unwrap(), Domain::Agricultural);
        assert!(Domain::from_str("finance").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for domain in Domain::ALL {
            assert_eq!(Domain::from_str(&domain.to_string()).unwrap(), domain);
        }
    }

    #[test]
    fn test_disclaimer_flag() {
        assert!(Domain::Medical.requires_disclaimer());
        assert!(!Domain::Agricultural.requires_disclaimer());
    }
}
