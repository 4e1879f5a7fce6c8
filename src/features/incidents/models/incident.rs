use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Severity enum matching the `severity_level` database enum.
///
/// Variant names are the wire and storage literals; no case renaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "severity_level")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Parses the exact literal; anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Severity::Low),
            "Medium" => Some(Severity::Medium),
            "High" => Some(Severity::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

/// Database model for incident
#[derive(Debug, Clone, FromRow)]
pub struct Incident {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
}

/// Validated data for inserting a new incident
#[derive(Debug)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_exact_literals() {
        assert_eq!(Severity::parse("Low"), Some(Severity::Low));
        assert_eq!(Severity::parse("Medium"), Some(Severity::Medium));
        assert_eq!(Severity::parse("High"), Some(Severity::High));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Severity::parse("low"), None);
        assert_eq!(Severity::parse("HIGH"), None);
        assert_eq!(Severity::parse("Critical"), None);
        assert_eq!(Severity::parse(""), None);
    }

    #[test]
    fn severity_serializes_as_exact_literal() {
        assert_eq!(
            serde_json::to_string(&Severity::Medium).unwrap(),
            "\"Medium\""
        );

        let parsed: Severity = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(parsed, Severity::High);
    }

    #[test]
    fn display_matches_wire_literal() {
        assert_eq!(Severity::Low.to_string(), "Low");
        assert_eq!(Severity::High.to_string(), "High");
    }
}
