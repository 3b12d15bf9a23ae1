pub mod contact;
pub mod outcome;
pub mod payload;
pub mod template;

pub use contact::Contact;
pub use outcome::{CampaignResult, DispatchOutcome, ErrorDetail};
pub use payload::{
    ComponentKind, ComponentParameter, LanguageRef, MediaLink, MessagingProduct,
    OutgoingTemplateMessage, PayloadComponent, SendReceipt, TemplateRef,
};
pub use template::{
    HeaderFormat, TemplateButton, TemplateCapabilities, TemplateDescriptor, TemplatePart,
    TemplateSummary,
};
