//! Questionnaire (intake form) records and their categorical vocabularies.
//!
//! Purpose: describe the client intake form captured before a nutrition plan
//! is drawn up. Every categorical answer is restricted to a fixed vocabulary
//! matched case-insensitively; body metrics are plain numbers.
//!
//! Public surface:
//! - [`Questionnaire`] — the persisted record.
//! - [`QuestionnaireSubmission`] — raw, unvalidated inbound answers.
//! - [`QuestionnaireProfile`] — answers that passed [`validate_submission`].
//! - One enum per categorical answer ([`Goal`], [`Gender`], …).

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ClientId, QuestionnaireId};

mod validation;

pub use validation::{parse_plan, validate_submission};

/// Categorical answer backed by a fixed vocabulary.
///
/// The vocabulary is the table of lower-case keys in [`Categorical::ALLOWED`];
/// callers normalise input with [`str::to_lowercase`] before looking it up.
pub trait Categorical: Sized + Copy {
    /// Wire name of the field holding this answer.
    const FIELD: &'static str;
    /// Client-facing message for a value outside the vocabulary.
    const REJECTION: &'static str;
    /// Accepted values, in their canonical lower-case form.
    const ALLOWED: &'static [&'static str];

    /// Look up an exact canonical key.
    fn from_key(key: &str) -> Option<Self>;

    /// Canonical key for this value.
    fn as_str(self) -> &'static str;

    /// Match `raw` against the vocabulary ignoring letter case.
    fn parse_case_insensitive(raw: &str) -> Option<Self> {
        Self::from_key(&raw.to_lowercase())
    }
}

macro_rules! define_categorical {
    (
        $(#[$outer:meta])*
        pub enum $name:ident ($field:literal, $rejection:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl Categorical for $name {
            const FIELD: &'static str = $field;
            const REJECTION: &'static str = $rejection;
            const ALLOWED: &'static [&'static str] = &[$($key),+];

            fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_categorical! {
    /// What the client wants to achieve.
    pub enum Goal (
        "objetivo",
        "Objective accepts 'perder peso', 'manter peso', 'ganhar massa' as a valid result."
    ) {
        LoseWeight => "perder peso",
        MaintainWeight => "manter peso",
        GainMass => "ganhar massa",
    }
}

define_categorical! {
    /// Self-declared gender.
    pub enum Gender (
        "genero",
        "Gender accepts 'feminino', 'masculino', 'outro' as a valid result."
    ) {
        Male => "masculino",
        Female => "feminino",
        Other => "outro",
    }
}

define_categorical! {
    /// Habitual level of physical activity.
    pub enum PhysicalActivity (
        "capacidade_fisica",
        "Physical capacity accepts 'sedentarismo', 'atividade fisica moderada', \
         'atividade fisica intensa' as a valid result."
    ) {
        Sedentary => "sedentarismo",
        Moderate => "atividade fisica moderada",
        Intense => "atividade fisica intensa",
    }
}

define_categorical! {
    /// Food allergy to plan around.
    pub enum Allergy (
        "alergia",
        "Alergia accepts 'gluten', 'laticinios', 'amendoim', 'peixes', 'ovos', \
         'mariscos' or 'nenhum' as valid results."
    ) {
        Gluten => "gluten",
        Dairy => "laticinios",
        Peanut => "amendoim",
        Fish => "peixes",
        Eggs => "ovos",
        Shellfish => "mariscos",
        NoAllergy => "nenhum",
    }
}

define_categorical! {
    /// Dietary restriction followed by the client.
    pub enum DietaryRestriction (
        "restricao_alimentar",
        "Food restriction accepts 'qualquer coisa', 'vegetariano', 'vegano' as a valid result."
    ) {
        Anything => "qualquer coisa",
        Vegetarian => "vegetariano",
        Vegan => "vegano",
    }
}

define_categorical! {
    /// Whether the client has time to prepare meals.
    pub enum MealPrepTime (
        "tempo_preparo",
        "Preparation time accepts 'sim', 'não' as a valid result."
    ) {
        Yes => "sim",
        No => "não",
    }
}

define_categorical! {
    /// Subscription tier attached to a questionnaire.
    pub enum SubscriptionTier ("plano", "Plano must be 'plus1', 'plus2' or 'familia'") {
        Plus1 => "plus1",
        Plus2 => "plus2",
        Family => "familia",
    }
}

define_categorical! {
    /// Avatar picture chosen by the client.
    ///
    /// Unlike the other vocabularies, avatars are matched exactly.
    pub enum Avatar ("foto", "Invalid value for 'foto'") {
        Avatar1 => "avatar1",
        Avatar2 => "avatar2",
        Avatar3 => "avatar3",
        Avatar4 => "avatar4",
        Avatar5 => "avatar5",
        Avatar6 => "avatar6",
    }
}

/// Numeric answer as it arrives on the wire: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NumericInput {
    /// A JSON number.
    Number(f64),
    /// A string expected to hold a number, such as `"70.5"`.
    Text(String),
}

impl NumericInput {
    /// Whether the value counts as absent: an empty string, zero, or NaN.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(value) => *value == 0.0 || value.is_nan(),
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Parse the value into a finite number.
    pub fn to_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Raw questionnaire answers plus the caller token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionnaireSubmission {
    pub token: Option<String>,
    pub goal: Option<String>,
    pub gender: Option<String>,
    pub height: Option<NumericInput>,
    pub age: Option<NumericInput>,
    pub weight: Option<NumericInput>,
    pub physical_activity: Option<String>,
    pub dietary_restriction: Option<String>,
    pub meal_prep_time: Option<String>,
    pub allergy: Option<String>,
    pub avatar: Option<String>,
    pub plan: Option<String>,
    pub client_id: Option<String>,
}

/// Answers that passed validation, ready to become a [`Questionnaire`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireProfile {
    pub goal: Goal,
    pub gender: Gender,
    pub height: f64,
    pub age: f64,
    pub weight: f64,
    pub physical_activity: PhysicalActivity,
    pub dietary_restriction: DietaryRestriction,
    pub meal_prep_time: MealPrepTime,
    pub allergy: Allergy,
    pub avatar: Option<Avatar>,
    pub plan: Option<SubscriptionTier>,
    pub client_id: ClientId,
}

/// Persisted questionnaire record.
///
/// ## Invariants
/// - Every categorical answer belongs to its vocabulary.
/// - `client_id` referenced an existing client when the record was created.
/// - Only `plan` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Questionnaire {
    pub id: QuestionnaireId,
    pub goal: Goal,
    pub gender: Gender,
    pub height: f64,
    pub age: f64,
    pub weight: f64,
    pub physical_activity: PhysicalActivity,
    pub dietary_restriction: DietaryRestriction,
    pub meal_prep_time: MealPrepTime,
    pub allergy: Allergy,
    pub avatar: Option<Avatar>,
    pub plan: Option<SubscriptionTier>,
    pub client_id: ClientId,
}

impl Questionnaire {
    /// Build a record from validated answers and a freshly generated id.
    pub fn new(id: QuestionnaireId, profile: QuestionnaireProfile) -> Self {
        let QuestionnaireProfile {
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
        } = profile;
        Self {
            id,
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
        }
    }

    /// Copy of this record with a different subscription tier.
    #[must_use]
    pub fn with_plan(mut self, plan: SubscriptionTier) -> Self {
        self.plan = Some(plan);
        self
    }
}
