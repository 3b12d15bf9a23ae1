use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("template is required")]
    MissingTemplate,
    #[error("no contacts provided")]
    NoContacts,
    #[error("failed to inspect template: {0:#}")]
    TemplateInspection(anyhow::Error),
}

impl CampaignError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CampaignError::MissingTemplate | CampaignError::NoContacts)
    }
}

/// Why a single message was not accepted by the provider.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: Value },
    #[error("{0}")]
    Transport(String),
}
