use serde_json::Value;
use uuid::Uuid;

use crate::domain::{errors::SendError, models::Contact};

/// Failure payload attached to a contact's outcome: the provider's error body
/// when one came back, a plain message otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    Structured(Value),
    Message(String),
}

impl ErrorDetail {
    pub fn to_value(&self) -> Value {
        match self {
            ErrorDetail::Structured(value) => value.clone(),
            ErrorDetail::Message(message) => Value::String(message.clone()),
        }
    }
}

impl From<SendError> for ErrorDetail {
    fn from(value: SendError) -> Self {
        match value {
            SendError::Rejected { body, .. } => ErrorDetail::Structured(body),
            SendError::Transport(message) => ErrorDetail::Message(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Success {
        contact: Contact,
        message_id: Option<String>,
    },
    Failure {
        contact: Contact,
        error: ErrorDetail,
    },
}

impl DispatchOutcome {
    pub fn contact(&self) -> &Contact {
        match self {
            DispatchOutcome::Success { contact, .. } | DispatchOutcome::Failure { contact, .. } => {
                contact
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success { .. })
    }
}

/// Outcomes of one campaign, in contact order.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignResult {
    pub campaign_id: Uuid,
    pub outcomes: Vec<DispatchOutcome>,
}

impl CampaignResult {
    pub fn aggregate(campaign_id: Uuid, outcomes: Vec<DispatchOutcome>) -> Self {
        Self {
            campaign_id,
            outcomes,
        }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.successful()
    }
}
