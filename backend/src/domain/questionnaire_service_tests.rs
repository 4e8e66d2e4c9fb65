//! Tests for the questionnaire service pipelines.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    Claims, MockClientRepository, MockIdGenerator, MockQuestionnaireRepository,
    MockTokenVerifier,
};
use crate::domain::{Client, Goal, SubscriptionTier};
use rstest::{fixture, rstest};

type TestService = QuestionnaireService<
    MockTokenVerifier,
    MockIdGenerator,
    MockClientRepository,
    MockQuestionnaireRepository,
>;

struct Mocks {
    tokens: MockTokenVerifier,
    ids: MockIdGenerator,
    clients: MockClientRepository,
    forms: MockQuestionnaireRepository,
}

impl Mocks {
    fn into_service(self) -> TestService {
        QuestionnaireService::new(
            Arc::new(self.tokens),
            Arc::new(self.ids),
            Arc::new(self.clients),
            Arc::new(self.forms),
        )
    }
}

#[fixture]
fn mocks() -> Mocks {
    Mocks {
        tokens: MockTokenVerifier::new(),
        ids: MockIdGenerator::new(),
        clients: MockClientRepository::new(),
        forms: MockQuestionnaireRepository::new(),
    }
}

#[fixture]
fn submission() -> QuestionnaireSubmission {
    QuestionnaireSubmission {
        token: Some("T".to_owned()),
        goal: Some("Perder Peso".to_owned()),
        gender: Some("Feminino".to_owned()),
        height: Some("165".into()),
        age: Some("30".into()),
        weight: Some("60".into()),
        physical_activity: Some("Sedentarismo".to_owned()),
        dietary_restriction: Some("Vegano".to_owned()),
        meal_prep_time: Some("Sim".to_owned()),
        allergy: Some("Nenhum".to_owned()),
        avatar: None,
        plan: None,
        client_id: Some("C1".to_owned()),
    }
}

fn stored_questionnaire(id: &str) -> Questionnaire {
    let profile = validate_submission(&submission()).expect("fixture submission is valid");
    Questionnaire::new(QuestionnaireId::new(id).expect("fixture id"), profile)
}

fn accept_token(tokens: &mut MockTokenVerifier) {
    tokens
        .expect_verify()
        .times(1)
        .return_once(|_| Ok(Some(Claims::new("subject"))));
}

fn reject_token(tokens: &mut MockTokenVerifier) {
    tokens.expect_verify().times(1).return_once(|_| Ok(None));
}

fn client_exists(clients: &mut MockClientRepository) {
    clients
        .expect_find_by_id()
        .withf(|id| id.as_ref() == "C1")
        .times(1)
        .return_once(|id| Ok(Some(Client::new(id.clone()))));
}

#[rstest]
#[tokio::test]
async fn create_persists_once_with_a_generated_id(
    mut mocks: Mocks,
    submission: QuestionnaireSubmission,
) {
    accept_token(&mut mocks.tokens);
    client_exists(&mut mocks.clients);
    mocks
        .ids
        .expect_generate()
        .times(1)
        .return_const("F-42".to_owned());
    mocks
        .forms
        .expect_create()
        .withf(|record| record.id.as_ref() == "F-42")
        .times(1)
        .return_once(|_| Ok(()));

    let record = mocks
        .into_service()
        .create(submission)
        .await
        .expect("questionnaire created");

    assert_eq!(record.id.as_ref(), "F-42");
    assert_eq!(record.goal, Goal::LoseWeight);
    assert_eq!(record.height, 165.0);
    assert_eq!(record.client_id.as_ref(), "C1");
}

#[rstest]
#[tokio::test]
async fn create_without_token_does_no_work(mut mocks: Mocks, mut submission: QuestionnaireSubmission) {
    submission.token = None;
    mocks.tokens.expect_verify().times(0);
    mocks.clients.expect_find_by_id().times(0);
    mocks.forms.expect_create().times(0);

    let err = mocks
        .into_service()
        .create(submission)
        .await
        .expect_err("token required");
    assert_eq!(err.code(), ErrorCode::Unauthenticated);
    assert_eq!(err.status(), Some(401));
}

#[rstest]
#[tokio::test]
async fn create_with_rejected_token_skips_validation(
    mut mocks: Mocks,
    mut submission: QuestionnaireSubmission,
) {
    submission.goal = None;
    reject_token(&mut mocks.tokens);
    mocks.forms.expect_create().times(0);

    let err = mocks
        .into_service()
        .create(submission)
        .await
        .expect_err("token rejected");
    assert_eq!(err.code(), ErrorCode::InvalidToken);
    assert_eq!(err.message(), "Invalid token.");
}

#[rstest]
#[tokio::test]
async fn create_with_invalid_answers_skips_client_lookup(
    mut mocks: Mocks,
    mut submission: QuestionnaireSubmission,
) {
    submission.goal = Some("Correr".to_owned());
    accept_token(&mut mocks.tokens);
    mocks.clients.expect_find_by_id().times(0);
    mocks.forms.expect_create().times(0);

    let err = mocks
        .into_service()
        .create(submission)
        .await
        .expect_err("invalid goal");
    assert_eq!(err.code(), ErrorCode::InvalidEnumValue);
    assert_eq!(err.status(), Some(422));
    for goal in ["perder peso", "manter peso", "ganhar massa"] {
        assert!(err.message().contains(goal), "message names {goal}");
    }
}

#[rstest]
#[tokio::test]
async fn create_for_unknown_client_is_not_persisted(
    mut mocks: Mocks,
    submission: QuestionnaireSubmission,
) {
    accept_token(&mut mocks.tokens);
    mocks
        .clients
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    mocks.ids.expect_generate().times(0);
    mocks.forms.expect_create().times(0);

    let err = mocks
        .into_service()
        .create(submission)
        .await
        .expect_err("unknown client");
    assert_eq!(err.code(), ErrorCode::ClientNotFound);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Client could not be found");
}

#[rstest]
#[tokio::test]
async fn create_with_whitespace_client_id_looks_the_client_up(
    mut mocks: Mocks,
    mut submission: QuestionnaireSubmission,
) {
    submission.client_id = Some("   ".to_owned());
    accept_token(&mut mocks.tokens);
    mocks
        .clients
        .expect_find_by_id()
        .withf(|id| id.as_ref() == "   ")
        .times(1)
        .return_once(|_| Ok(None));
    mocks.forms.expect_create().times(0);

    let err = mocks
        .into_service()
        .create(submission)
        .await
        .expect_err("unknown client");
    assert_eq!(err.code(), ErrorCode::ClientNotFound);
    assert_eq!(err.status(), Some(404));
}

#[rstest]
#[tokio::test]
async fn create_surfaces_repository_failures_as_internal(
    mut mocks: Mocks,
    submission: QuestionnaireSubmission,
) {
    accept_token(&mut mocks.tokens);
    client_exists(&mut mocks.clients);
    mocks
        .ids
        .expect_generate()
        .return_const("F-1".to_owned());
    mocks
        .forms
        .expect_create()
        .times(1)
        .return_once(|_| Err(QuestionnaireRepositoryError::connection("refused")));

    let err = mocks
        .into_service()
        .create(submission)
        .await
        .expect_err("repository down");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn update_plan_checks_existence_before_the_token(mut mocks: Mocks) {
    mocks
        .forms
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    mocks.tokens.expect_verify().times(0);
    mocks.forms.expect_update_plan().times(0);

    let err = mocks
        .into_service()
        .update_plan(UpdatePlanRequest {
            questionnaire_id: "missing".to_owned(),
            plan: Some("plus1".to_owned()),
            token: None,
        })
        .await
        .expect_err("unknown questionnaire");
    assert_eq!(err.code(), ErrorCode::FormNotFound);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Form with ID missing not found.");
}

#[rstest]
#[tokio::test]
async fn update_plan_rejects_invalid_token(mut mocks: Mocks) {
    mocks
        .forms
        .expect_find_by_id()
        .return_once(|_| Ok(Some(stored_questionnaire("F-1"))));
    reject_token(&mut mocks.tokens);
    mocks.forms.expect_update_plan().times(0);

    let err = mocks
        .into_service()
        .update_plan(UpdatePlanRequest {
            questionnaire_id: "F-1".to_owned(),
            plan: Some("plus1".to_owned()),
            token: Some("stale".to_owned()),
        })
        .await
        .expect_err("token rejected");
    assert_eq!(err.code(), ErrorCode::InvalidToken);
    assert_eq!(err.status(), Some(401));
}

#[rstest]
#[case(Some("gold"))]
#[case(None)]
#[tokio::test]
async fn update_plan_rejects_bad_plans_with_bad_request(
    mut mocks: Mocks,
    #[case] plan: Option<&str>,
) {
    mocks
        .forms
        .expect_find_by_id()
        .return_once(|_| Ok(Some(stored_questionnaire("F-1"))));
    accept_token(&mut mocks.tokens);
    mocks.forms.expect_update_plan().times(0);

    let err = mocks
        .into_service()
        .update_plan(UpdatePlanRequest {
            questionnaire_id: "F-1".to_owned(),
            plan: plan.map(str::to_owned),
            token: Some("T".to_owned()),
        })
        .await
        .expect_err("bad plan");
    assert_eq!(err.code(), ErrorCode::InvalidPlan);
    assert_eq!(err.status(), Some(400));
}

#[rstest]
#[tokio::test]
async fn update_plan_returns_the_repository_result(mut mocks: Mocks) {
    mocks
        .forms
        .expect_find_by_id()
        .return_once(|_| Ok(Some(stored_questionnaire("F-1"))));
    accept_token(&mut mocks.tokens);
    mocks
        .forms
        .expect_update_plan()
        .withf(|id, plan| id.as_ref() == "F-1" && *plan == SubscriptionTier::Family)
        .times(1)
        .return_once(|_, plan| Ok(Some(stored_questionnaire("F-1").with_plan(plan))));

    let updated = mocks
        .into_service()
        .update_plan(UpdatePlanRequest {
            questionnaire_id: "F-1".to_owned(),
            plan: Some("FAMILIA".to_owned()),
            token: Some("T".to_owned()),
        })
        .await
        .expect("plan updated");
    assert_eq!(updated.plan, Some(SubscriptionTier::Family));
}

#[rstest]
#[case("F-1")]
#[case("")]
#[tokio::test]
async fn get_by_id_requires_a_token_first(mut mocks: Mocks, #[case] id: &str) {
    mocks.tokens.expect_verify().times(0);
    mocks.forms.expect_find_by_id().times(0);

    let err = mocks
        .into_service()
        .get_by_id(id, Some(""))
        .await
        .expect_err("token required");
    assert_eq!(err.code(), ErrorCode::Unauthenticated);
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), "Insert a token please!");
}

#[rstest]
#[tokio::test]
async fn get_by_id_requires_an_id(mut mocks: Mocks) {
    mocks.tokens.expect_verify().times(0);

    let err = mocks
        .into_service()
        .get_by_id("", Some("T"))
        .await
        .expect_err("id required");
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "Insert a id_formulario please!");
}

#[rstest]
#[tokio::test]
async fn get_by_id_rejects_invalid_tokens(mut mocks: Mocks) {
    reject_token(&mut mocks.tokens);
    mocks.forms.expect_find_by_id().times(0);

    let err = mocks
        .into_service()
        .get_by_id("F-1", Some("stale"))
        .await
        .expect_err("token rejected");
    assert_eq!(err.code(), ErrorCode::InvalidToken);
    assert_eq!(err.message(), "Invalid token!");
}

#[rstest]
#[tokio::test]
async fn get_by_id_reports_missing_forms_as_bad_request(mut mocks: Mocks) {
    accept_token(&mut mocks.tokens);
    mocks
        .forms
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let err = mocks
        .into_service()
        .get_by_id("F-9", Some("T"))
        .await
        .expect_err("not found");
    assert_eq!(err.code(), ErrorCode::FormNotFound);
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "There is no form with that ID!");
}

#[rstest]
#[tokio::test]
async fn get_by_id_returns_the_stored_record(mut mocks: Mocks) {
    accept_token(&mut mocks.tokens);
    mocks
        .forms
        .expect_find_by_id()
        .withf(|id| id.as_ref() == "F-1")
        .return_once(|_| Ok(Some(stored_questionnaire("F-1"))));

    let record = mocks
        .into_service()
        .get_by_id("F-1", Some("T"))
        .await
        .expect("record found");
    assert_eq!(record.id.as_ref(), "F-1");
}

#[rstest]
#[tokio::test]
async fn list_needs_no_token(mut mocks: Mocks) {
    mocks.tokens.expect_verify().times(0);
    mocks
        .forms
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![stored_questionnaire("F-1"), stored_questionnaire("F-2")]));

    let records = mocks.into_service().list().await.expect("listed");
    assert_eq!(records.len(), 2);
}
