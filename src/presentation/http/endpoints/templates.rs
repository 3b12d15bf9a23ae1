use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::map_template,
    responses::{ErrorDto, ListTemplatesResponse, TemplatesDto},
};

#[derive(Clone)]
pub struct TemplatesEndpoints {
    state: Arc<ApiState>,
}

impl TemplatesEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl TemplatesEndpoints {
    #[oai(path = "/templates", method = "get", tag = EndpointsTags::Templates)]
    pub async fn list_templates(&self) -> ListTemplatesResponse {
        match self.state.list_templates_usecase.execute().await {
            Ok(templates) => ListTemplatesResponse::Ok(Json(TemplatesDto {
                templates: templates.iter().map(map_template).collect(),
            })),
            Err(err) => {
                tracing::error!("failed to fetch templates: {err:#}");
                ListTemplatesResponse::InternalError(Json(ErrorDto::new(
                    "Failed to fetch templates from provider",
                )))
            }
        }
    }
}
