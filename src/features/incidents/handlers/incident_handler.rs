use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::incidents::dtos::{CreateIncidentDto, IncidentResponseDto};
use crate::features::incidents::services::IncidentService;
use crate::shared::types::ErrorResponse;

/// Parses a path id. Non-numeric ids are reported as 400 before any
/// storage access.
fn parse_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid ID format".to_string()))
}

/// List all incidents, most recent first
#[utoipa::path(
    get,
    path = "/incidents",
    responses(
        (status = 200, description = "List of incidents", body = Vec<IncidentResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "incidents"
)]
pub async fn list_incidents(
    State(service): State<Arc<IncidentService>>,
) -> Result<Json<Vec<IncidentResponseDto>>> {
    let incidents = service.list().await?;
    Ok(Json(incidents))
}

/// Report a new incident
#[utoipa::path(
    post,
    path = "/incidents",
    request_body = CreateIncidentDto,
    responses(
        (status = 201, description = "Incident created", body = IncidentResponseDto),
        (status = 400, description = "Missing fields or invalid severity", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "incidents"
)]
pub async fn create_incident(
    State(service): State<Arc<IncidentService>>,
    AppJson(dto): AppJson<CreateIncidentDto>,
) -> Result<(StatusCode, Json<IncidentResponseDto>)> {
    let new_incident = dto.validate()?;

    let incident = service.create(new_incident).await?;
    Ok((StatusCode::CREATED, Json(incident)))
}

/// Fetch a single incident by id
#[utoipa::path(
    get,
    path = "/incidents/{id}",
    params(
        ("id" = String, Path, description = "Incident id")
    ),
    responses(
        (status = 200, description = "Incident found", body = IncidentResponseDto),
        (status = 400, description = "Invalid ID format", body = ErrorResponse),
        (status = 404, description = "Incident not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "incidents"
)]
pub async fn get_incident(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<String>,
) -> Result<Json<IncidentResponseDto>> {
    let id = parse_id(&id)?;

    let incident = service.get(id).await?;
    Ok(Json(incident))
}

/// Delete an incident by id
#[utoipa::path(
    delete,
    path = "/incidents/{id}",
    params(
        ("id" = String, Path, description = "Incident id")
    ),
    responses(
        (status = 204, description = "Incident deleted"),
        (status = 400, description = "Invalid ID format", body = ErrorResponse),
        (status = 404, description = "Incident not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "incidents"
)]
pub async fn delete_incident(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;

    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("0").unwrap(), 0);
    }

    #[test]
    fn parse_id_rejects_non_numeric_input() {
        for raw in ["abc", "12abc", "1.5", ""] {
            let err = parse_id(raw).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "raw = {:?}", raw);
            assert!(err.to_string().contains("Invalid ID format"));
        }
    }
}
