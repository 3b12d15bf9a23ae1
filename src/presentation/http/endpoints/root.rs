use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    list_templates::ListTemplatesUseCase, send_campaign::SendCampaignUseCase,
};

#[derive(Clone)]
pub struct ApiState {
    pub send_campaign_usecase: Arc<SendCampaignUseCase>,
    pub list_templates_usecase: Arc<ListTemplatesUseCase>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Templates,
    Campaigns,
}
