use async_trait::async_trait;

use crate::domain::{
    errors::SendError,
    models::{OutgoingTemplateMessage, SendReceipt, TemplateDescriptor},
};

/// Outbound operations against the messaging platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Every template registered for the business account.
    async fn list_templates(&self) -> anyhow::Result<Vec<TemplateDescriptor>>;

    /// Templates matching `name` and `language`, as filtered by the provider.
    async fn find_templates(
        &self,
        name: &str,
        language: &str,
    ) -> anyhow::Result<Vec<TemplateDescriptor>>;

    async fn send_template(
        &self,
        message: &OutgoingTemplateMessage,
    ) -> Result<SendReceipt, SendError>;
}
