use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagingProduct {
    Whatsapp,
}

/// Body of `POST /{phone_number_id}/messages` for a template message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingTemplateMessage {
    pub messaging_product: MessagingProduct,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub template: TemplateRef,
}

impl OutgoingTemplateMessage {
    pub fn new(to: impl Into<String>, template: TemplateRef) -> Self {
        Self {
            messaging_product: MessagingProduct::Whatsapp,
            to: to.into(),
            message_type: "template".to_string(),
            template,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRef {
    pub name: String,
    pub language: LanguageRef,
    pub components: Vec<PayloadComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRef {
    pub code: String,
}

impl From<&str> for LanguageRef {
    fn from(value: &str) -> Self {
        Self {
            code: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub parameters: Vec<ComponentParameter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Header,
    Body,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentParameter {
    Text { text: String },
    Image { image: MediaLink },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLink {
    pub link: String,
}

/// What the provider answered for an accepted send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub status: u16,
    pub message_id: Option<String>,
}
