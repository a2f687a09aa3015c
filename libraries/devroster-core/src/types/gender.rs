/// Gender of a developer record
use crate::error::DevError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gender, carried on the wire as a single-letter token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// `"M"`
    #[serde(rename = "M")]
    Male,
    /// `"F"`
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Wire token
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = DevError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(DevError::InvalidGender(other.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tokens() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn rejects_unknown_token() {
        let err = "UNKNOWN_TOKEN".parse::<Gender>().unwrap_err();
        assert!(matches!(err, DevError::InvalidGender(ref t) if t == "UNKNOWN_TOKEN"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!("m".parse::<Gender>().is_err());
    }

    #[test]
    fn serializes_as_token() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"F\"");
        let g: Gender = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(g, Gender::Male);
    }
}
