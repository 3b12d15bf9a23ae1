use std::sync::Arc;

use crate::{
    application::services::provider::MessagingProvider, domain::models::TemplateSummary,
};

pub struct ListTemplatesUseCase {
    provider: Arc<dyn MessagingProvider>,
}

impl ListTemplatesUseCase {
    pub fn new(provider: Arc<dyn MessagingProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self) -> anyhow::Result<Vec<TemplateSummary>> {
        let templates = self.provider.list_templates().await?;
        Ok(templates.into_iter().map(TemplateSummary::from).collect())
    }
}
