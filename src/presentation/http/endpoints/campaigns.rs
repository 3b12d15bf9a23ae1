use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::{map_campaign_result, map_send_request},
    requests::SendTemplateRequestDto,
    responses::{ErrorDto, SendTemplateResponse},
};

#[derive(Clone)]
pub struct CampaignsEndpoints {
    state: Arc<ApiState>,
}

impl CampaignsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl CampaignsEndpoints {
    /// Sends the template to each contact in order and reports one result
    /// per contact.
    #[oai(path = "/send-template", method = "post", tag = EndpointsTags::Campaigns)]
    pub async fn send_template(
        &self,
        request: Json<SendTemplateRequestDto>,
    ) -> SendTemplateResponse {
        let payload = map_send_request(request.0);

        match self.state.send_campaign_usecase.execute(payload).await {
            Ok(result) => SendTemplateResponse::Ok(Json(map_campaign_result(&result))),
            Err(err) if err.is_validation() => {
                SendTemplateResponse::BadRequest(Json(ErrorDto::new(err.to_string())))
            }
            Err(err) => SendTemplateResponse::InternalError(Json(
                ErrorDto::new("Failed to process campaign").with_details(err.to_string()),
            )),
        }
    }
}
