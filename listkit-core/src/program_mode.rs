//! Program modes
//!
//! Closed set of session formats. Each variant has a symbolic key
//! (`ONE_ON_ONE`) and the string identifier used on the wire (`1on1`).
//! Parsing accepts identifiers only, so an unknown mode cannot be constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ListkitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramMode {
    #[serde(rename = "group")]
    Group,
    #[serde(rename = "1on1")]
    OneOnOne,
    #[serde(rename = "announcement")]
    Announcement,
    #[serde(rename = "selfDirected")]
    SelfDirected,
    #[serde(rename = "planned1on1")]
    PlannedOneOnOne,
    #[serde(rename = "plannedSelfDirected")]
    PlannedSelfDirected,
}

impl ProgramMode {
    /// Every mode, in declaration order
    pub const ALL: [ProgramMode; 6] = [
        ProgramMode::Group,
        ProgramMode::OneOnOne,
        ProgramMode::Announcement,
        ProgramMode::SelfDirected,
        ProgramMode::PlannedOneOnOne,
        ProgramMode::PlannedSelfDirected,
    ];

    /// String identifier (`"1on1"`, `"selfDirected"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramMode::Group => "group",
            ProgramMode::OneOnOne => "1on1",
            ProgramMode::Announcement => "announcement",
            ProgramMode::SelfDirected => "selfDirected",
            ProgramMode::PlannedOneOnOne => "planned1on1",
            ProgramMode::PlannedSelfDirected => "plannedSelfDirected",
        }
    }

    /// Symbolic key (`"ONE_ON_ONE"`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            ProgramMode::Group => "GROUP",
            ProgramMode::OneOnOne => "ONE_ON_ONE",
            ProgramMode::Announcement => "ANNOUNCEMENT",
            ProgramMode::SelfDirected => "SELF_DIRECTED",
            ProgramMode::PlannedOneOnOne => "PLANNED_ONE_ON_ONE",
            ProgramMode::PlannedSelfDirected => "PLANNED_SELF_DIRECTED",
        }
    }

    /// Look up a mode by its symbolic key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }
}

impl fmt::Display for ProgramMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramMode {
    type Err = ListkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ListkitError::unknown_program_mode(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_round_trip() {
        for mode in ProgramMode::ALL {
            assert_eq!(mode.as_str().parse::<ProgramMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_known_identifiers() {
        assert_eq!("group".parse::<ProgramMode>().unwrap(), ProgramMode::Group);
        assert_eq!("1on1".parse::<ProgramMode>().unwrap(), ProgramMode::OneOnOne);
        assert_eq!(ProgramMode::PlannedSelfDirected.to_string(), "plannedSelfDirected");
    }

    #[test]
    fn test_invalid_identifier_rejected() {
        let err = "invalid".parse::<ProgramMode>().unwrap_err();
        assert!(matches!(err, ListkitError::UnknownProgramMode { ref value } if value == "invalid"));
    }

    #[test]
    fn test_symbolic_key_is_not_an_identifier() {
        assert!("GROUP".parse::<ProgramMode>().is_err());
        assert_eq!(ProgramMode::from_key("GROUP"), Some(ProgramMode::Group));
        assert_eq!(ProgramMode::from_key("group"), None);
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&ProgramMode::PlannedOneOnOne).unwrap();
        assert_eq!(json, "\"planned1on1\"");

        let mode: ProgramMode = serde_json::from_str("\"selfDirected\"").unwrap();
        assert_eq!(mode, ProgramMode::SelfDirected);

        assert!(serde_json::from_str::<ProgramMode>("\"SELF_DIRECTED\"").is_err());
    }
}
