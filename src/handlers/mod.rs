pub mod export_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::services::http_helpers::json_error_handler;

pub use export_handler::{export_csv, export_json, export_qti};
pub use health_handler::health_check;
pub use quiz_handler::{generate_quiz, quiz_schema, shuffle_quiz};

/// Registers every route together with the JSON extractor error mapping.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .service(generate_quiz)
        .service(shuffle_quiz)
        .service(quiz_schema)
        .service(export_json)
        .service(export_csv)
        .service(export_qti);
}
