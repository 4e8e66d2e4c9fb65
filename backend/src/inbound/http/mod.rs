//! HTTP inbound adapter exposing REST endpoints.

pub mod appointments;
pub mod auth;
pub mod error;
pub mod health;
pub mod questionnaires;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

use actix_web::web;
use tracing::debug;

use crate::domain::Error;

pub use error::ApiResult;

/// JSON extractor settings shared by every API route.
///
/// Bodies that are not valid JSON are reported as unclassified errors,
/// which reach the client as 400 with the parser's message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _request| {
        debug!(error = %err, "rejecting malformed JSON body");
        Error::unclassified(err.to_string()).into()
    })
}

/// Register the questionnaire and appointment routes on a scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use nutriplan::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(questionnaires::create_questionnaire)
        .service(questionnaires::list_questionnaires)
        .service(questionnaires::get_questionnaire)
        .service(questionnaires::update_questionnaire_plan)
        .service(appointments::create_appointment)
        .service(appointments::list_appointments)
        .service(appointments::get_appointment);
}
