use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::Quiz,
        dto::{request::GenerateQuizRequest, response::GenerateQuizResponse},
    },
    services::schema_validator::validate_quiz,
};

#[post("/api/generate")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let request_id = get_request_id(&req).unwrap_or_default();
    let params = request.into_parameters();
    log::info!(
        "[{}] Generating {} {} questions on '{}'",
        request_id,
        params.num_questions,
        params.difficulty,
        params.topic
    );

    match state.generation_service.generate(&params).await {
        Ok(generated) => {
            log::info!(
                "[{}] Generated {} questions via {}",
                request_id,
                generated.quiz.questions.len(),
                generated.mode
            );
            Ok(HttpResponse::Ok().json(GenerateQuizResponse::from(generated)))
        }
        Err(failure) => {
            log::warn!("[{}] Generation failed: {}", request_id, failure.error);
            Err(failure.into())
        }
    }
}

#[post("/api/quiz/shuffle")]
pub async fn shuffle_quiz(quiz: web::Json<Quiz>) -> Result<HttpResponse, AppError> {
    let quiz = validate_quiz(quiz.into_inner())?;
    let shuffled = quiz.reshuffled(&mut rand::thread_rng());
    Ok(HttpResponse::Ok().json(shuffled))
}

#[get("/api/quiz/schema")]
pub async fn quiz_schema() -> HttpResponse {
    HttpResponse::Ok().json(schemars::schema_for!(Quiz))
}
