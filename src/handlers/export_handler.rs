use actix_web::{post, web, HttpResponse};

use crate::{
    errors::AppError,
    models::domain::Quiz,
    services::{
        csv_export::quiz_to_csv,
        http_helpers::{attachment, CONTENT_TYPE_CSV, CONTENT_TYPE_JSON, CONTENT_TYPE_ZIP},
        qti_export::quiz_to_qti_zip,
        schema_validator::validate_quiz,
    },
};

#[post("/api/export/json")]
pub async fn export_json(quiz: web::Json<Quiz>) -> Result<HttpResponse, AppError> {
    let quiz = validate_quiz(quiz.into_inner())?;
    let body = serde_json::to_string_pretty(&quiz)?;
    let filename = format!("{}_quiz.json", quiz.file_stem());
    Ok(attachment(body, CONTENT_TYPE_JSON, &filename))
}

#[post("/api/export/csv")]
pub async fn export_csv(quiz: web::Json<Quiz>) -> Result<HttpResponse, AppError> {
    let quiz = validate_quiz(quiz.into_inner())?;
    let filename = format!("{}_quiz.csv", quiz.file_stem());
    Ok(attachment(quiz_to_csv(&quiz), CONTENT_TYPE_CSV, &filename))
}

#[post("/api/export/qti")]
pub async fn export_qti(quiz: web::Json<Quiz>) -> Result<HttpResponse, AppError> {
    let quiz = validate_quiz(quiz.into_inner())?;
    let bytes = quiz_to_qti_zip(&quiz)?;
    log::debug!("Built QTI package of {} bytes", bytes.len());
    let filename = format!("{}_QTI.zip", quiz.file_stem());
    Ok(attachment(bytes, CONTENT_TYPE_ZIP, &filename))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use actix_web::{
        http::{header, StatusCode},
        test, App,
    };

    use super::*;
    use crate::{handlers::configure, test_utils::fixtures::sample_quiz};

    fn multi_word_topic_quiz() -> Quiz {
        let mut quiz = sample_quiz(2);
        quiz.metadata.topic = "Cell  Biology basics".to_string();
        quiz
    }

    fn disposition(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[actix_web::test]
    async fn test_export_json_is_pretty_attachment() {
        let app = test::init_service(App::new().configure(configure)).await;
        let quiz = multi_word_topic_quiz();

        let req = test::TestRequest::post()
            .uri("/api/export/json")
            .set_json(&quiz)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(disposition(&resp).contains("Cell_Biology_basics_quiz.json"));
        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("\n  \"title\""));
        let round: Quiz = serde_json::from_str(text).unwrap();
        assert_eq!(round, quiz);
    }

    #[actix_web::test]
    async fn test_export_csv_attachment() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/export/csv")
            .set_json(multi_word_topic_quiz())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(disposition(&resp).contains("Cell_Biology_basics_quiz.csv"));
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            CONTENT_TYPE_CSV
        );
        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap().lines().count(), 3);
    }

    #[actix_web::test]
    async fn test_export_qti_is_zip() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/export/qti")
            .set_json(multi_word_topic_quiz())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(disposition(&resp).contains("Cell_Biology_basics_QTI.zip"));
        let body = test::read_body(resp).await;
        let archive = zip::ZipArchive::new(Cursor::new(body.to_vec())).unwrap();
        assert_eq!(archive.len(), 2);
    }

    #[actix_web::test]
    async fn test_export_rejects_invalid_quiz() {
        let app = test::init_service(App::new().configure(configure)).await;
        let mut quiz = sample_quiz(2);
        quiz.questions[1].id = "Q1".to_string();

        for uri in ["/api/export/json", "/api/export/csv", "/api/export/qti"] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_json(&quiz)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }
}
