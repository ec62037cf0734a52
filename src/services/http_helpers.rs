use actix_web::{
    body::MessageBody,
    error::JsonPayloadError,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    HttpRequest, HttpResponse,
};

use crate::errors::AppError;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_CSV: &str = "text/csv; charset=utf-8";
pub const CONTENT_TYPE_ZIP: &str = "application/zip";

/// Creates a download response with a `Content-Disposition: attachment` header
pub fn attachment<B>(body: B, content_type: &str, filename: &str) -> HttpResponse
where
    B: MessageBody + 'static,
{
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename.to_string())],
        })
        .body(body)
}

/// Maps JSON extractor failures onto the same 400 body as field validation
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", err);
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test::TestRequest};

    #[test]
    fn test_attachment_headers() {
        let response = attachment("a,b", CONTENT_TYPE_CSV, "Cell_Biology_quiz.csv");
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"Cell_Biology_quiz.csv\"");
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            CONTENT_TYPE_CSV
        );
    }

    #[test]
    fn test_json_error_handler_is_bad_request() {
        let req = TestRequest::default().to_http_request();
        let err = json_error_handler(JsonPayloadError::ContentType, &req);
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
