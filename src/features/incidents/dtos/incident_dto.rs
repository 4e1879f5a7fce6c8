use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::incidents::models::{Incident, NewIncident, Severity};

/// Request DTO for reporting an incident.
///
/// Every field deserializes as optional so that missing-field handling
/// lands in [`CreateIncidentDto::validate`] with the contract's error
/// messages instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateIncidentDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

impl CreateIncidentDto {
    /// Checks the required fields, then the severity literal.
    /// First failure wins; nothing here touches storage.
    pub fn validate(self) -> Result<NewIncident> {
        let (title, description, severity) = match (
            self.title.filter(|s| !s.is_empty()),
            self.description.filter(|s| !s.is_empty()),
            self.severity.filter(|s| !s.is_empty()),
        ) {
            (Some(title), Some(description), Some(severity)) => (title, description, severity),
            _ => {
                return Err(AppError::Validation(
                    "Missing required fields: title, description, and severity are required"
                        .to_string(),
                ))
            }
        };

        let severity = Severity::parse(&severity).ok_or_else(|| {
            AppError::Validation(
                "Invalid severity level. Must be one of: Low, Medium, High".to_string(),
            )
        })?;

        Ok(NewIncident {
            title,
            description,
            severity,
        })
    }
}

/// Response DTO for incident
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IncidentResponseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
}

impl From<Incident> for IncidentResponseDto {
    fn from(i: Incident) -> Self {
        Self {
            id: i.id,
            title: i.title,
            description: i.description,
            severity: i.severity,
            reported_at: i.reported_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::Fake;

    fn complete_dto() -> CreateIncidentDto {
        CreateIncidentDto {
            title: Some(Sentence(3..6).fake()),
            description: Some(Paragraph(1..3).fake()),
            severity: Some("High".to_string()),
        }
    }

    #[test]
    fn validate_accepts_complete_payload() {
        let new_incident = complete_dto().validate().unwrap();
        assert_eq!(new_incident.severity, Severity::High);
        assert!(!new_incident.title.is_empty());
        assert!(!new_incident.description.is_empty());
    }

    #[test]
    fn validate_rejects_missing_description() {
        let dto = CreateIncidentDto {
            description: None,
            ..complete_dto()
        };

        let err = dto.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("Missing required fields"));
    }

    #[test]
    fn validate_rejects_empty_title() {
        let dto = CreateIncidentDto {
            title: Some(String::new()),
            ..complete_dto()
        };

        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("Missing required fields"));
    }

    #[test]
    fn validate_rejects_unknown_severity() {
        let dto = CreateIncidentDto {
            severity: Some("Critical".to_string()),
            ..complete_dto()
        };

        let err = dto.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err
            .to_string()
            .contains("Invalid severity level. Must be one of: Low, Medium, High"));
    }

    #[test]
    fn required_fields_are_checked_before_severity() {
        let dto = CreateIncidentDto {
            title: None,
            severity: Some("Critical".to_string()),
            ..complete_dto()
        };

        let err = dto.validate().unwrap_err();
        assert!(err.to_string().contains("Missing required fields"));
    }
}
