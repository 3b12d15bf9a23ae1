use crate::domain::models::{
    ComponentKind, ComponentParameter, Contact, MediaLink, OutgoingTemplateMessage,
    PayloadComponent, TemplateCapabilities, TemplateRef,
};

#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    header_image_url: String,
}

impl PayloadBuilder {
    pub fn new(header_image_url: impl Into<String>) -> Self {
        Self {
            header_image_url: header_image_url.into(),
        }
    }

    /// Header component (if any) always precedes the body component. The
    /// contact's name fills `{{1}}`; no other placeholders are supplied.
    pub fn build(
        &self,
        template_name: &str,
        language_code: &str,
        capabilities: TemplateCapabilities,
        contact: &Contact,
    ) -> OutgoingTemplateMessage {
        let mut components = Vec::with_capacity(2);

        if capabilities.has_image_header {
            components.push(PayloadComponent {
                kind: ComponentKind::Header,
                parameters: vec![ComponentParameter::Image {
                    image: MediaLink {
                        link: self.header_image_url.clone(),
                    },
                }],
            });
        }

        if capabilities.has_body_params {
            components.push(PayloadComponent {
                kind: ComponentKind::Body,
                parameters: vec![ComponentParameter::Text {
                    text: contact.name.clone(),
                }],
            });
        }

        OutgoingTemplateMessage::new(
            contact.phone.clone(),
            TemplateRef {
                name: template_name.to_string(),
                language: language_code.into(),
                components,
            },
        )
    }
}
