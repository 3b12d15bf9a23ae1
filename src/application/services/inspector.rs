use std::sync::Arc;

use anyhow::Context;

use crate::{
    application::services::provider::MessagingProvider,
    domain::models::TemplateCapabilities,
};

pub struct TemplateInspector {
    provider: Arc<dyn MessagingProvider>,
}

impl TemplateInspector {
    pub fn new(provider: Arc<dyn MessagingProvider>) -> Self {
        Self { provider }
    }

    /// Resolves which message parts need parameters. A template the provider
    /// does not know about is treated as parameterless; only a failed read is
    /// an error.
    pub async fn inspect(
        &self,
        template_name: &str,
        language_code: &str,
    ) -> anyhow::Result<TemplateCapabilities> {
        let templates = self
            .provider
            .find_templates(template_name, language_code)
            .await
            .context("failed to fetch template definition from provider")?;

        let Some(template) = templates.iter().find(|t| t.name == template_name) else {
            tracing::warn!(
                template = template_name,
                language = language_code,
                "template not found, sending without parameters"
            );
            return Ok(TemplateCapabilities::default());
        };

        Ok(TemplateCapabilities::of(template))
    }
}
