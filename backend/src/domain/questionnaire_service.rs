//! Questionnaire domain service.
//!
//! Implements the questionnaire driving ports. Each operation is a strictly
//! sequential pipeline that stops at the first failing guard.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::auth::{CREATE_GATE, LOOKUP_GATE, authorize, require_token, verify_token};
use crate::domain::ports::{
    ClientRepository, ClientRepositoryError, IdGenerator, QuestionnaireCommand,
    QuestionnaireQuery, QuestionnaireRepository, QuestionnaireRepositoryError, TokenVerifier,
    UpdatePlanRequest,
};
use crate::domain::questionnaire::{parse_plan, validate_submission};
use crate::domain::{
    ClientId, Error, ErrorCode, Questionnaire, QuestionnaireId, QuestionnaireSubmission,
};

/// Questionnaire service implementing the driving ports.
#[derive(Clone)]
pub struct QuestionnaireService<T, G, C, F> {
    tokens: Arc<T>,
    ids: Arc<G>,
    clients: Arc<C>,
    forms: Arc<F>,
}

impl<T, G, C, F> QuestionnaireService<T, G, C, F> {
    /// Create a new service from its collaborators.
    pub fn new(tokens: Arc<T>, ids: Arc<G>, clients: Arc<C>, forms: Arc<F>) -> Self {
        Self {
            tokens,
            ids,
            clients,
            forms,
        }
    }
}

impl<T, G, C, F> QuestionnaireService<T, G, C, F>
where
    T: TokenVerifier,
    G: IdGenerator,
    C: ClientRepository,
    F: QuestionnaireRepository,
{
    fn map_form_error(err: QuestionnaireRepositoryError) -> Error {
        error!(error = %err, "questionnaire repository failed");
        Error::internal(format!("questionnaire repository error: {err}"))
    }

    fn map_client_error(err: ClientRepositoryError) -> Error {
        error!(error = %err, "client repository failed");
        Error::internal(format!("client repository error: {err}"))
    }

    fn form_not_found_for_update(id: &str) -> Error {
        Error::new(
            ErrorCode::FormNotFound,
            format!("Form with ID {id} not found."),
        )
    }

    async fn ensure_client_exists(&self, client_id: &ClientId) -> Result<(), Error> {
        let client = self
            .clients
            .find_by_id(client_id)
            .await
            .map_err(Self::map_client_error)?;
        if client.is_none() {
            info!(client_id = %client_id, "questionnaire rejected: unknown client");
            return Err(Error::new(
                ErrorCode::ClientNotFound,
                "Client could not be found",
            ));
        }
        Ok(())
    }

    fn next_id(&self) -> Result<QuestionnaireId, Error> {
        QuestionnaireId::new(self.ids.generate())
            .map_err(|err| Error::internal(format!("identifier generator failed: {err}")))
    }

    async fn find(&self, id: &str) -> Result<Option<Questionnaire>, Error> {
        let Ok(id) = QuestionnaireId::new(id) else {
            return Ok(None);
        };
        self.forms
            .find_by_id(&id)
            .await
            .map_err(Self::map_form_error)
    }
}

#[async_trait]
impl<T, G, C, F> QuestionnaireCommand for QuestionnaireService<T, G, C, F>
where
    T: TokenVerifier,
    G: IdGenerator,
    C: ClientRepository,
    F: QuestionnaireRepository,
{
    async fn create(&self, submission: QuestionnaireSubmission) -> Result<Questionnaire, Error> {
        authorize(
            self.tokens.as_ref(),
            submission.token.as_deref(),
            CREATE_GATE,
        )
        .await?;
        let profile = validate_submission(&submission)?;
        self.ensure_client_exists(&profile.client_id).await?;

        let questionnaire = Questionnaire::new(self.next_id()?, profile);
        self.forms
            .create(&questionnaire)
            .await
            .map_err(Self::map_form_error)?;

        info!(
            questionnaire_id = %questionnaire.id,
            client_id = %questionnaire.client_id,
            "questionnaire created"
        );
        Ok(questionnaire)
    }

    async fn update_plan(&self, request: UpdatePlanRequest) -> Result<Questionnaire, Error> {
        let UpdatePlanRequest {
            questionnaire_id,
            plan,
            token,
        } = request;

        // Existence is checked before the token on this path.
        let Some(existing) = self.find(&questionnaire_id).await? else {
            return Err(Self::form_not_found_for_update(&questionnaire_id));
        };
        verify_token(self.tokens.as_ref(), token.as_deref(), CREATE_GATE.invalid).await?;
        let plan = parse_plan(plan.as_deref())?;

        let updated = self
            .forms
            .update_plan(&existing.id, plan)
            .await
            .map_err(Self::map_form_error)?
            .ok_or_else(|| Self::form_not_found_for_update(&questionnaire_id))?;

        info!(questionnaire_id = %updated.id, plan = %plan, "questionnaire plan updated");
        Ok(updated)
    }
}

#[async_trait]
impl<T, G, C, F> QuestionnaireQuery for QuestionnaireService<T, G, C, F>
where
    T: TokenVerifier,
    G: IdGenerator,
    C: ClientRepository,
    F: QuestionnaireRepository,
{
    async fn get_by_id(&self, id: &str, token: Option<&str>) -> Result<Questionnaire, Error> {
        let token = require_token(token, LOOKUP_GATE.missing)?;
        if id.is_empty() {
            return Err(Error::invalid_request("Insert a id_formulario please!"));
        }
        verify_token(self.tokens.as_ref(), Some(token), LOOKUP_GATE.invalid).await?;

        self.find(id).await?.ok_or_else(|| {
            Error::new(ErrorCode::FormNotFound, "There is no form with that ID!").with_status(400)
        })
    }

    async fn list(&self) -> Result<Vec<Questionnaire>, Error> {
        self.forms.list().await.map_err(Self::map_form_error)
    }
}

#[cfg(test)]
#[path = "questionnaire_service_tests.rs"]
mod tests;
