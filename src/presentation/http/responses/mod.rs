use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct OutcomeDto {
    pub name: String,
    pub phone: String,
    pub success: bool,
    #[oai(skip_serializing_if_is_none)]
    pub message_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<serde_json::Value>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CampaignResultDto {
    pub campaign_id: Uuid,
    pub results: Vec<OutcomeDto>,
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
}

#[derive(Object, Debug)]
pub struct TemplateSummaryDto {
    pub name: String,
    pub language: String,
    pub status: String,
    pub category: String,
}

#[derive(Object, Debug)]
pub struct TemplatesDto {
    pub templates: Vec<TemplateSummaryDto>,
}

#[derive(Object, Debug)]
pub struct ErrorDto {
    pub error: String,
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "invalid_send_request")]
pub enum SendTemplateResponse {
    /// Every contact was attempted; see each result for its outcome.
    #[oai(status = 200)]
    Ok(Json<CampaignResultDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    /// The template definition could not be read; nothing was sent.
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

/// Body that could not be decoded, e.g. `contacts` that is not a list.
fn invalid_send_request(err: poem::Error) -> SendTemplateResponse {
    SendTemplateResponse::BadRequest(Json(ErrorDto::new(err.to_string())))
}

#[derive(ApiResponse)]
pub enum ListTemplatesResponse {
    #[oai(status = 200)]
    Ok(Json<TemplatesDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}
