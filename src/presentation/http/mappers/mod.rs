use crate::{
    application::usecases::send_campaign::SendCampaignRequest,
    domain::models::{CampaignResult, Contact, DispatchOutcome, TemplateSummary},
    presentation::http::{
        requests::SendTemplateRequestDto,
        responses::{CampaignResultDto, OutcomeDto, TemplateSummaryDto},
    },
};

pub fn map_send_request(request: SendTemplateRequestDto) -> SendCampaignRequest {
    SendCampaignRequest {
        template: request.template.unwrap_or_default(),
        language: request.language,
        contacts: request
            .contacts
            .unwrap_or_default()
            .into_iter()
            .map(|contact| Contact::new(contact.name, contact.phone))
            .collect(),
    }
}

pub fn map_outcome(outcome: &DispatchOutcome) -> OutcomeDto {
    let contact = outcome.contact();
    let (message_id, error) = match outcome {
        DispatchOutcome::Success { message_id, .. } => (message_id.clone(), None),
        DispatchOutcome::Failure { error, .. } => (None, Some(error.to_value())),
    };

    OutcomeDto {
        name: contact.name.clone(),
        phone: contact.phone.clone(),
        success: outcome.is_success(),
        message_id,
        error,
    }
}

pub fn map_campaign_result(result: &CampaignResult) -> CampaignResultDto {
    CampaignResultDto {
        campaign_id: result.campaign_id,
        results: result.outcomes.iter().map(map_outcome).collect(),
        total: result.total() as u32,
        successful: result.successful() as u32,
        failed: result.failed() as u32,
    }
}

pub fn map_template(template: &TemplateSummary) -> TemplateSummaryDto {
    TemplateSummaryDto {
        name: template.name.clone(),
        language: template.language.clone(),
        status: template.status.clone(),
        category: template.category.clone(),
    }
}
