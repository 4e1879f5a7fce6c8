use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::incidents::dtos::IncidentResponseDto;
use crate::features::incidents::models::{Incident, NewIncident};

/// Service for incident operations
pub struct IncidentService {
    pool: PgPool,
}

impl IncidentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all incidents, most recently reported first
    pub async fn list(&self) -> Result<Vec<IncidentResponseDto>> {
        let incidents = sqlx::query_as::<_, Incident>(
            r#"
            SELECT id, title, description, severity, reported_at
            FROM incidents
            ORDER BY reported_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list incidents: {:?}", e);
            AppError::database("Failed to fetch incidents", e)
        })?;

        Ok(incidents.into_iter().map(|i| i.into()).collect())
    }

    /// Insert a new incident; the database assigns `id` and `reported_at`
    pub async fn create(&self, new_incident: NewIncident) -> Result<IncidentResponseDto> {
        let incident = sqlx::query_as::<_, Incident>(
            r#"
            INSERT INTO incidents (title, description, severity)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, severity, reported_at
            "#,
        )
        .bind(&new_incident.title)
        .bind(&new_incident.description)
        .bind(new_incident.severity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create incident: {:?}", e);
            AppError::database("Failed to create incident", e)
        })?;

        tracing::info!(
            "Incident created: id={}, severity={}",
            incident.id,
            incident.severity
        );

        Ok(incident.into())
    }

    /// Get a single incident by id
    pub async fn get(&self, id: i32) -> Result<IncidentResponseDto> {
        let incident = sqlx::query_as::<_, Incident>(
            r#"
            SELECT id, title, description, severity, reported_at
            FROM incidents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch incident {}: {:?}", id, e);
            AppError::database("Failed to fetch incident", e)
        })?;

        incident
            .map(|i| i.into())
            .ok_or_else(|| AppError::NotFound("Incident not found".to_string()))
    }

    /// Delete an incident by id
    ///
    /// The statement returns the deleted row so zero-rows maps cleanly
    /// to not-found; the row itself is not reported back to the client.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let deleted = sqlx::query_as::<_, Incident>(
            r#"
            DELETE FROM incidents
            WHERE id = $1
            RETURNING id, title, description, severity, reported_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete incident {}: {:?}", id, e);
            AppError::database("Failed to delete incident", e)
        })?;

        match deleted {
            Some(incident) => {
                tracing::info!("Incident deleted: id={}", incident.id);
                Ok(())
            }
            None => Err(AppError::NotFound("Incident not found".to_string())),
        }
    }
}
