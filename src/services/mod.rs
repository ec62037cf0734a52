pub mod csv_export;
pub mod http_helpers;
pub mod lenient_repair;
pub mod model_service;
pub mod plain_template;
pub mod prompt_builder;
pub mod qti_export;
pub mod quiz_generation_service;
pub mod schema_validator;
pub mod text_extractor;
