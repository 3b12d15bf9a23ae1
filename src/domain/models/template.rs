use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\d+\}\}").expect("placeholder pattern is valid"));

/// Template definition as returned by the provider's `message_templates` edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    pub name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub components: Vec<TemplatePart>,
}

impl TemplateDescriptor {
    pub fn body_text(&self) -> Option<&str> {
        self.components.iter().find_map(|part| match part {
            TemplatePart::Body { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn header_format(&self) -> Option<HeaderFormat> {
        self.components.iter().find_map(|part| match part {
            TemplatePart::Header { format, .. } => Some(*format),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum TemplatePart {
    Header {
        #[serde(default)]
        format: HeaderFormat,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    Body {
        #[serde(default)]
        text: String,
    },
    Footer {
        #[serde(default)]
        text: String,
    },
    Buttons {
        #[serde(default)]
        buttons: Vec<TemplateButton>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeaderFormat {
    #[default]
    Text,
    Image,
    Video,
    Document,
    Location,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateButton {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// Projection used by the template picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    pub name: String,
    pub language: String,
    pub status: String,
    pub category: String,
}

impl From<TemplateDescriptor> for TemplateSummary {
    fn from(value: TemplateDescriptor) -> Self {
        Self {
            name: value.name,
            language: value.language,
            status: value.status,
            category: value.category,
        }
    }
}

/// Which parts of a template need runtime parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateCapabilities {
    pub has_body_params: bool,
    pub has_image_header: bool,
}

impl TemplateCapabilities {
    /// Only the first header and the first body part are considered.
    pub fn of(template: &TemplateDescriptor) -> Self {
        Self {
            has_body_params: template
                .body_text()
                .is_some_and(|text| PLACEHOLDER.is_match(text)),
            has_image_header: template.header_format() == Some(HeaderFormat::Image),
        }
    }
}
