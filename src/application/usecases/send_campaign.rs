use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::services::{
        inspector::TemplateInspector, payload_builder::PayloadBuilder,
        provider::MessagingProvider,
    },
    domain::{
        errors::CampaignError,
        models::{CampaignResult, Contact, DispatchOutcome, ErrorDetail, TemplateCapabilities},
    },
};

pub struct SendCampaignConfig {
    pub default_language: String,
    pub header_image_url: String,
}

pub struct SendCampaignRequest {
    pub template: String,
    pub language: Option<String>,
    pub contacts: Vec<Contact>,
}

pub struct SendCampaignUseCase {
    provider: Arc<dyn MessagingProvider>,
    inspector: TemplateInspector,
    builder: PayloadBuilder,
    default_language: String,
}

impl SendCampaignUseCase {
    pub fn new(provider: Arc<dyn MessagingProvider>, config: SendCampaignConfig) -> Self {
        Self {
            inspector: TemplateInspector::new(provider.clone()),
            builder: PayloadBuilder::new(config.header_image_url),
            provider,
            default_language: config.default_language,
        }
    }

    /// Sends the template to every contact, one at a time, in input order.
    /// Only validation and template inspection can fail the whole campaign;
    /// per-contact send errors end up in that contact's outcome.
    pub async fn execute(
        &self,
        request: SendCampaignRequest,
    ) -> Result<CampaignResult, CampaignError> {
        let template = request.template.trim();
        if template.is_empty() {
            return Err(CampaignError::MissingTemplate);
        }
        if request.contacts.is_empty() {
            return Err(CampaignError::NoContacts);
        }

        let campaign_id = Uuid::new_v4();
        let language = request
            .language
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| self.default_language.clone());

        let capabilities = self
            .inspector
            .inspect(template, &language)
            .await
            .map_err(|err| {
                tracing::error!(%campaign_id, template, "{err:#}");
                CampaignError::TemplateInspection(err)
            })?;

        tracing::info!(
            %campaign_id,
            template,
            %language,
            contacts = request.contacts.len(),
            has_body_params = capabilities.has_body_params,
            has_image_header = capabilities.has_image_header,
            "sending campaign"
        );

        let mut outcomes = Vec::with_capacity(request.contacts.len());
        for contact in request.contacts {
            let outcome = self
                .dispatch_one(template, &language, capabilities, contact)
                .await;
            outcomes.push(outcome);
        }

        let result = CampaignResult::aggregate(campaign_id, outcomes);
        tracing::info!(
            %campaign_id,
            total = result.total(),
            successful = result.successful(),
            failed = result.failed(),
            "campaign finished"
        );

        Ok(result)
    }

    async fn dispatch_one(
        &self,
        template: &str,
        language: &str,
        capabilities: TemplateCapabilities,
        contact: Contact,
    ) -> DispatchOutcome {
        let payload = self.builder.build(template, language, capabilities, &contact);

        let error = match self.provider.send_template(&payload).await {
            Ok(receipt) if matches!(receipt.status, 200 | 201) => {
                return DispatchOutcome::Success {
                    contact,
                    message_id: receipt.message_id,
                };
            }
            Ok(receipt) => {
                ErrorDetail::Message(format!("unexpected provider status {}", receipt.status))
            }
            Err(err) => ErrorDetail::from(err),
        };

        tracing::warn!(
            phone = %contact.phone,
            error = %error.to_value(),
            "failed to send template"
        );

        DispatchOutcome::Failure { contact, error }
    }
}
