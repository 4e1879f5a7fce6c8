use utoipa::{Modify, OpenApi};

use crate::features::incidents::{
    dtos as incidents_dtos, handlers as incidents_handlers, models as incidents_models,
};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        incidents_handlers::list_incidents,
        incidents_handlers::create_incident,
        incidents_handlers::get_incident,
        incidents_handlers::delete_incident,
    ),
    components(schemas(
        incidents_dtos::CreateIncidentDto,
        incidents_dtos::IncidentResponseDto,
        incidents_models::Severity,
        ErrorResponse,
    )),
    tags(
        (name = "incidents", description = "Incident tracking endpoints")
    )
)]
pub struct ApiDoc;

/// Applies the configured title/version/description to the document
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
