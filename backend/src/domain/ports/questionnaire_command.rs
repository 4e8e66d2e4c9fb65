//! Driving port for questionnaire mutations.
//!
//! Inbound adapters call this port with raw submissions; implementations own
//! authorisation, validation and persistence.

use async_trait::async_trait;

use crate::domain::{Error, Questionnaire, QuestionnaireSubmission};

/// Request to change the subscription tier of an existing questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlanRequest {
    pub questionnaire_id: String,
    pub plan: Option<String>,
    pub token: Option<String>,
}

#[async_trait]
pub trait QuestionnaireCommand: Send + Sync {
    /// Validate a submission and persist it as a new questionnaire.
    async fn create(&self, submission: QuestionnaireSubmission) -> Result<Questionnaire, Error>;

    /// Change the subscription tier of an existing questionnaire.
    async fn update_plan(&self, request: UpdatePlanRequest) -> Result<Questionnaire, Error>;
}
