//! Shared helpers for HTTP-level tests.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use poem::{Endpoint, http::StatusCode, test::TestClient};
use serde_json::Value;

use campaigns::{
    application::{
        services::provider::MessagingProvider,
        usecases::{
            list_templates::ListTemplatesUseCase,
            send_campaign::{SendCampaignConfig, SendCampaignUseCase},
        },
    },
    domain::{
        errors::SendError,
        models::{OutgoingTemplateMessage, SendReceipt, TemplateDescriptor},
    },
    presentation::http::{app, endpoints::root::ApiState},
};

pub const HEADER_IMAGE_URL: &str = "https://cdn.example.com/banner.jpeg";

/// Provider double: answers template reads from a fixed list (or fails when
/// none is set) and accepts every send except for phones scripted to fail.
pub struct ScriptedProvider {
    templates: Option<Vec<TemplateDescriptor>>,
    rejections: HashMap<String, Value>,
    sent: Mutex<Vec<OutgoingTemplateMessage>>,
    reads: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(templates: Vec<TemplateDescriptor>) -> Self {
        Self {
            templates: Some(templates),
            rejections: HashMap::new(),
            sent: Mutex::new(Vec::new()),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            templates: None,
            ..Self::new(vec![])
        }
    }

    pub fn rejecting(mut self, phone: &str, body: Value) -> Self {
        self.rejections.insert(phone.to_string(), body);
        self
    }

    pub fn sent(&self) -> Vec<OutgoingTemplateMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn templates(&self) -> anyhow::Result<Vec<TemplateDescriptor>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.templates
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}

#[async_trait]
impl MessagingProvider for ScriptedProvider {
    async fn list_templates(&self) -> anyhow::Result<Vec<TemplateDescriptor>> {
        self.templates()
    }

    async fn find_templates(
        &self,
        name: &str,
        language: &str,
    ) -> anyhow::Result<Vec<TemplateDescriptor>> {
        Ok(self
            .templates()?
            .into_iter()
            .filter(|t| t.name == name && t.language == language)
            .collect())
    }

    async fn send_template(
        &self,
        message: &OutgoingTemplateMessage,
    ) -> Result<SendReceipt, SendError> {
        self.sent.lock().unwrap().push(message.clone());

        match self.rejections.get(&message.to) {
            Some(body) => Err(SendError::Rejected {
                status: 400,
                body: body.clone(),
            }),
            None => Ok(SendReceipt {
                status: 200,
                message_id: Some(format!("wamid.{}", message.to)),
            }),
        }
    }
}

pub fn template(name: &str, language: &str, components: Value) -> TemplateDescriptor {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "language": language,
        "status": "APPROVED",
        "category": "MARKETING",
        "components": components
    }))
    .unwrap()
}

/// Builds the full app around `provider` with the same wiring as `main.rs`.
pub fn build_test_app(provider: Arc<ScriptedProvider>) -> TestClient<impl Endpoint> {
    let provider: Arc<dyn MessagingProvider> = provider;
    let state = Arc::new(ApiState {
        send_campaign_usecase: Arc::new(SendCampaignUseCase::new(
            provider.clone(),
            SendCampaignConfig {
                default_language: "pt_BR".to_string(),
                header_image_url: HEADER_IMAGE_URL.to_string(),
            },
        )),
        list_templates_usecase: Arc::new(ListTemplatesUseCase::new(provider)),
    });

    let server_url = String::from("http://localhost:3000");
    let endpoint = app(state, &server_url);
    // The endpoint must outlive the url it was built from, as in `main.rs`.
    drop(server_url);

    TestClient::new(endpoint)
}

pub async fn post_json(
    client: &TestClient<impl Endpoint>,
    uri: &str,
    body: &Value,
) -> (StatusCode, Value) {
    let response = client.post(uri).body_json(body).send().await;
    let status = response.0.status();
    let json = response.0.into_body().into_json::<Value>().await.unwrap();
    (status, json)
}

pub async fn get_json(client: &TestClient<impl Endpoint>, uri: &str) -> (StatusCode, Value) {
    let response = client.get(uri).send().await;
    let status = response.0.status();
    let json = response.0.into_body().into_json::<Value>().await.unwrap();
    (status, json)
}
