//! Field validation for questionnaire submissions.
//!
//! Rules run in a fixed order and stop at the first failure:
//! presence, numeric metrics, avatar, plan, then each categorical answer.

use serde_json::json;
use tracing::debug;

use super::{
    Allergy, Avatar, Categorical, DietaryRestriction, Gender, Goal, MealPrepTime, NumericInput,
    PhysicalActivity, QuestionnaireProfile, QuestionnaireSubmission, SubscriptionTier,
};
use crate::domain::{ClientId, Error, ErrorCode};

const HEIGHT: &str = "altura";
const AGE: &str = "idade";
const WEIGHT: &str = "peso";
const CLIENT_ID: &str = "id_cliente";

fn missing_input(field: &'static str) -> Error {
    debug!(field, "questionnaire rejected: missing input");
    Error::missing_input("Missing input.").with_details(json!({ "field": field }))
}

fn text_is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|text| text.is_empty())
}

fn number_is_blank(value: Option<&NumericInput>) -> bool {
    value.is_none_or(NumericInput::is_blank)
}

fn first_missing_field(submission: &QuestionnaireSubmission) -> Option<&'static str> {
    let checks = [
        (Allergy::FIELD, text_is_blank(submission.allergy.as_ref())),
        (Goal::FIELD, text_is_blank(submission.goal.as_ref())),
        (Gender::FIELD, text_is_blank(submission.gender.as_ref())),
        (HEIGHT, number_is_blank(submission.height.as_ref())),
        (AGE, number_is_blank(submission.age.as_ref())),
        (WEIGHT, number_is_blank(submission.weight.as_ref())),
        (
            PhysicalActivity::FIELD,
            text_is_blank(submission.physical_activity.as_ref()),
        ),
        (
            DietaryRestriction::FIELD,
            text_is_blank(submission.dietary_restriction.as_ref()),
        ),
        (
            MealPrepTime::FIELD,
            text_is_blank(submission.meal_prep_time.as_ref()),
        ),
        (CLIENT_ID, text_is_blank(submission.client_id.as_ref())),
    ];
    checks
        .into_iter()
        .find(|(_, blank)| *blank)
        .map(|(field, _)| field)
}

fn require_text<'a>(value: Option<&'a String>, field: &'static str) -> Result<&'a str, Error> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.as_str()),
        _ => Err(missing_input(field)),
    }
}

fn parse_metric(value: Option<&NumericInput>, field: &'static str) -> Result<f64, Error> {
    let input = value.ok_or_else(|| missing_input(field))?;
    input.to_number().ok_or_else(|| {
        debug!(field, "questionnaire rejected: metric is not a number");
        Error::new(ErrorCode::InvalidNumber, "Invalid number!")
            .with_details(json!({ "field": field, "value": input }))
    })
}

fn parse_avatar(value: Option<&String>) -> Result<Option<Avatar>, Error> {
    let Some(raw) = value else {
        return Ok(None);
    };
    Avatar::from_key(raw).map(Some).ok_or_else(|| {
        debug!(value = %raw, "questionnaire rejected: unknown avatar");
        Error::new(ErrorCode::InvalidAvatar, Avatar::REJECTION).with_details(json!({
            "field": Avatar::FIELD,
            "value": raw,
            "allowed": Avatar::ALLOWED,
        }))
    })
}

fn parse_optional_plan(value: Option<&String>) -> Result<Option<SubscriptionTier>, Error> {
    match value {
        Some(raw) if !raw.is_empty() => SubscriptionTier::parse_case_insensitive(raw)
            .map(Some)
            .ok_or_else(|| {
                debug!(value = %raw, "questionnaire rejected: unknown plan");
                Error::new(ErrorCode::InvalidPlan, SubscriptionTier::REJECTION).with_details(json!({
                    "field": SubscriptionTier::FIELD,
                    "value": raw,
                    "allowed": SubscriptionTier::ALLOWED,
                }))
            }),
        _ => Ok(None),
    }
}

fn parse_categorical<T: Categorical>(raw: &str) -> Result<T, Error> {
    T::parse_case_insensitive(raw).ok_or_else(|| {
        debug!(field = T::FIELD, value = %raw, "questionnaire rejected: value outside vocabulary");
        Error::new(ErrorCode::InvalidEnumValue, T::REJECTION).with_details(json!({
            "field": T::FIELD,
            "value": raw,
            "allowed": T::ALLOWED,
        }))
    })
}

fn categorical_answer<T: Categorical>(value: Option<&String>) -> Result<T, Error> {
    parse_categorical(require_text(value, T::FIELD)?)
}

/// Validate a submission's answers.
///
/// The caller token is not inspected here; authorisation runs before this.
///
/// # Errors
/// - [`ErrorCode::MissingInput`] when a required answer is empty, zero or absent.
/// - [`ErrorCode::InvalidNumber`] when height, age or weight is not numeric.
/// - [`ErrorCode::InvalidAvatar`] when the avatar is not an exact known value.
/// - [`ErrorCode::InvalidPlan`] when a non-empty plan is unknown.
/// - [`ErrorCode::InvalidEnumValue`] when a categorical answer is unknown.
pub fn validate_submission(
    submission: &QuestionnaireSubmission,
) -> Result<QuestionnaireProfile, Error> {
    if let Some(field) = first_missing_field(submission) {
        return Err(missing_input(field));
    }

    let height = parse_metric(submission.height.as_ref(), HEIGHT)?;
    let age = parse_metric(submission.age.as_ref(), AGE)?;
    let weight = parse_metric(submission.weight.as_ref(), WEIGHT)?;
    let avatar = parse_avatar(submission.avatar.as_ref())?;
    let plan = parse_optional_plan(submission.plan.as_ref())?;

    let goal = categorical_answer::<Goal>(submission.goal.as_ref())?;
    let gender = categorical_answer::<Gender>(submission.gender.as_ref())?;
    let physical_activity =
        categorical_answer::<PhysicalActivity>(submission.physical_activity.as_ref())?;
    let allergy = categorical_answer::<Allergy>(submission.allergy.as_ref())?;
    let dietary_restriction =
        categorical_answer::<DietaryRestriction>(submission.dietary_restriction.as_ref())?;
    let meal_prep_time = categorical_answer::<MealPrepTime>(submission.meal_prep_time.as_ref())?;

    let client_id = ClientId::new(require_text(submission.client_id.as_ref(), CLIENT_ID)?)
        .map_err(|_| missing_input(CLIENT_ID))?;

    Ok(QuestionnaireProfile {
        goal,
        gender,
        height,
        age,
        weight,
        physical_activity,
        dietary_restriction,
        meal_prep_time,
        allergy,
        avatar,
        plan,
        client_id,
    })
}

/// Validate the plan supplied to a tier update.
///
/// Unlike creation, a missing or unknown plan is a plain bad request here.
///
/// # Errors
/// Returns a 400 [`ErrorCode::InvalidPlan`] error when `raw` is absent, empty,
/// or outside the tier vocabulary.
pub fn parse_plan(raw: Option<&str>) -> Result<SubscriptionTier, Error> {
    let raw = raw.filter(|value| !value.is_empty()).ok_or_else(|| {
        Error::new(ErrorCode::InvalidPlan, "Missing 'plano' field.").with_status(400)
    })?;
    SubscriptionTier::parse_case_insensitive(raw).ok_or_else(|| {
        Error::new(
            ErrorCode::InvalidPlan,
            "Invalid value for 'plano'. Must be 'plus1', 'plus2' or 'familia'.",
        )
        .with_status(400)
        .with_details(json!({
            "field": SubscriptionTier::FIELD,
            "value": raw,
            "allowed": SubscriptionTier::ALLOWED,
        }))
    })
}
