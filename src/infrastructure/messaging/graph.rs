use std::{collections::HashSet, sync::Arc};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    application::services::provider::MessagingProvider,
    domain::{
        errors::SendError,
        models::{OutgoingTemplateMessage, SendReceipt, TemplateDescriptor},
    },
};

#[derive(Clone)]
pub struct GraphApiConfig {
    pub base_url: String,
    pub access_token: String,
    pub business_account_id: String,
    pub phone_number_id: String,
}

/// WhatsApp Cloud API over the Graph HTTP interface.
pub struct GraphApiClient {
    http: Client,
    config: GraphApiConfig,
}

impl GraphApiClient {
    pub fn new(config: GraphApiConfig) -> anyhow::Result<Arc<dyn MessagingProvider>> {
        let http = Client::builder()
            .user_agent("campaigns/graph")
            .build()
            .context("failed to build graph api client")?;

        Ok(Arc::new(Self { http, config }) as Arc<dyn MessagingProvider>)
    }

    fn templates_url(&self) -> String {
        format!(
            "{}/{}/message_templates",
            self.config.base_url.trim_end_matches('/'),
            self.config.business_account_id
        )
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/{}/messages",
            self.config.base_url.trim_end_matches('/'),
            self.config.phone_number_id
        )
    }

    async fn read_templates(response: Response) -> anyhow::Result<GraphEnvelope> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            anyhow::bail!("graph api returned error status {}: {}", status, body);
        }

        response
            .json()
            .await
            .context("failed to parse graph api template list")
    }
}

#[async_trait]
impl MessagingProvider for GraphApiClient {
    async fn list_templates(&self) -> anyhow::Result<Vec<TemplateDescriptor>> {
        let mut templates = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(self.templates_url());

        while let Some(url) = next {
            if !visited.insert(url.clone()) {
                tracing::warn!(%url, "graph api paging revisited a page, stopping");
                break;
            }
            let response = self
                .http
                .get(&url)
                .bearer_auth(&self.config.access_token)
                .send()
                .await
                .context("failed to request templates from graph api")?;

            let page = Self::read_templates(response).await?;
            templates.extend(page.data);
            next = page.paging.and_then(|paging| paging.next);
        }

        Ok(templates)
    }

    async fn find_templates(
        &self,
        name: &str,
        language: &str,
    ) -> anyhow::Result<Vec<TemplateDescriptor>> {
        let response = self
            .http
            .get(self.templates_url())
            .bearer_auth(&self.config.access_token)
            .query(&[("name", name), ("language", language)])
            .send()
            .await
            .context("failed to request template from graph api")?;

        Ok(Self::read_templates(response).await?.data)
    }

    async fn send_template(
        &self,
        message: &OutgoingTemplateMessage,
    ) -> Result<SendReceipt, SendError> {
        let response = self
            .http
            .post(self.messages_url())
            .bearer_auth(&self.config.access_token)
            .json(message)
            .send()
            .await
            .map_err(|err| SendError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|err| SendError::Transport(err.to_string()))?;
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let message_id = response
            .json::<GraphSendResponse>()
            .await
            .ok()
            .and_then(|payload| payload.messages.into_iter().next())
            .map(|message| message.id);

        Ok(SendReceipt {
            status: status.as_u16(),
            message_id,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GraphEnvelope {
    #[serde(default)]
    data: Vec<TemplateDescriptor>,
    paging: Option<GraphPaging>,
}

#[derive(Debug, Deserialize)]
struct GraphPaging {
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphSendResponse {
    #[serde(default)]
    messages: Vec<GraphMessageRef>,
}

#[derive(Debug, Deserialize)]
struct GraphMessageRef {
    id: String,
}
